//! Calculator MCP Server implementation
//!
//! Exposes the calculator API to AI agents as MCP tools. Arithmetic happens
//! in the API; this server only forwards requests and formats replies.

use crate::client::{CalculatorClient, ClientError};
use anyhow::Result;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// Operators the API accepts, with a short description of each
const OPERATIONS: [(&str, &str); 4] = [
    ("+", "addition"),
    ("-", "subtraction"),
    ("*", "multiplication"),
    ("/", "division (the divisor must be non-zero)"),
];

/// Calculator MCP Server
#[derive(Clone)]
pub struct CalculatorServer {
    client: CalculatorClient,
    tool_router: ToolRouter<Self>,
}

impl CalculatorServer {
    pub fn from_env() -> Result<Self> {
        let client = CalculatorClient::from_env()?;
        Ok(Self::new(client))
    }

    pub fn new(client: CalculatorClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CalculateParams {
    /// First operand
    pub num1: f64,
    /// Second operand
    pub num2: f64,
    /// Operator symbol: "+", "-", "*" or "/"
    pub operation: String,
}

#[tool_router]
impl CalculatorServer {
    #[tool(
        description = "Apply one arithmetic operator (+, -, *, /) to two numbers and return the result."
    )]
    async fn calculate(
        &self,
        params: Parameters<CalculateParams>,
    ) -> Result<CallToolResult, McpError> {
        let CalculateParams {
            num1,
            num2,
            operation,
        } = params.0;

        match self.client.calculate(num1, num2, &operation).await {
            Ok(result) => Ok(CallToolResult::success(vec![Content::text(format_result(
                num1, num2, &operation, result,
            ))])),
            Err(e @ ClientError::Calculation(_)) => {
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Calculator API call failed");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }

    #[tool(description = "List the supported arithmetic operators.")]
    async fn operations(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            operations_text(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for CalculatorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "calculator".into(),
                title: Some("Calculator MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"Calculator - two-operand arithmetic

TOOLS:
- 'calculate' - num1, num2 and an operation symbol (+, -, *, /)
- 'operations' - list the supported operators

ERRORS:
- Division by zero is rejected
- Any other operator symbol is rejected as an unknown operation"#
                    .into(),
            ),
        }
    }
}

fn format_result(num1: f64, num2: f64, operation: &str, result: f64) -> String {
    format!("{} {} {} = {}", num1, operation, num2, result)
}

fn operations_text() -> String {
    let mut buf = String::from("Supported operations:\n");
    for (symbol, description) in OPERATIONS {
        buf.push_str(&format!("- `{}` {}\n", symbol, description));
    }
    buf
}
