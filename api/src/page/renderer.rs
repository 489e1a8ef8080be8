//! Page renderer
//!
//! Renders the calculator page. The markup is static: nothing from the request
//! reaches it, so the output is identical on every call.

use crate::domain::entities::Operation;

pub const SCRIPT_PATH: &str = "/static/js/script.js";
pub const STYLESHEET_PATH: &str = "/static/css/style.css";

/// Client-side logic for the page
pub const SCRIPT: &str = include_str!("../../static/js/script.js");

pub const STYLESHEET: &str = include_str!("../../static/css/style.css");

/// Render the calculator page
pub fn render_index() -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n");
    buf.push_str("<html lang=\"en\">\n");
    buf.push_str("<head>\n");
    buf.push_str("    <meta charset=\"UTF-8\">\n");
    buf.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    buf.push_str("    <title>Calculator</title>\n");
    buf.push_str(&format!(
        "    <link rel=\"stylesheet\" href=\"{}\">\n",
        STYLESHEET_PATH
    ));
    buf.push_str("</head>\n");
    buf.push_str("<body>\n");
    buf.push_str("    <main class=\"calculator\">\n");
    buf.push_str("        <h1>Calculator</h1>\n");

    buf.push_str(&render_number_input("num1", "First number"));
    buf.push_str(&render_operations());
    buf.push_str(&render_number_input("num2", "Second number"));

    buf.push_str(
        "        <button type=\"button\" id=\"calculate-btn\" class=\"calculate-btn\">Calculate</button>\n",
    );

    // Result and error areas are filled in by the script
    buf.push_str("        <section class=\"result\">\n");
    buf.push_str("            <span class=\"result-label\">Result:</span>\n");
    buf.push_str("            <span id=\"result-display\" class=\"result-display\">0</span>\n");
    buf.push_str("        </section>\n");
    buf.push_str(
        "        <p id=\"error-message\" class=\"error-message\" role=\"alert\"></p>\n",
    );

    buf.push_str("    </main>\n");
    buf.push_str(&format!("    <script src=\"{}\"></script>\n", SCRIPT_PATH));
    buf.push_str("</body>\n");
    buf.push_str("</html>\n");

    buf
}

fn render_number_input(id: &str, label: &str) -> String {
    format!(
        "        <div class=\"input-group\">\n\
         \x20           <label for=\"{id}\">{label}</label>\n\
         \x20           <input type=\"number\" id=\"{id}\" name=\"{id}\" step=\"any\" placeholder=\"{label}\">\n\
         \x20       </div>\n"
    )
}

fn render_operations() -> String {
    let mut buf = String::from("        <div class=\"operations\">\n");

    for op in Operation::ALL {
        buf.push_str(&format!(
            "            <button type=\"button\" class=\"operation-btn\" data-operation=\"{}\" title=\"{}\">{}</button>\n",
            op.symbol(),
            op.label(),
            display_symbol(op)
        ));
    }

    buf.push_str("        </div>\n");
    buf
}

/// Symbol shown on the button face
fn display_symbol(op: Operation) -> &'static str {
    match op {
        Operation::Add => "+",
        Operation::Subtract => "&minus;",
        Operation::Multiply => "&times;",
        Operation::Divide => "&divide;",
    }
}
