//! HR Model Context Protocol implementation.
//!
//! The implementation is organized into:
//!
//! - `config`: Environment configuration (bind address, mount path, log format)
//! - `error`: Error types and conversions
//! - `dataset`: The embedded company/policy/department/employee tables
//! - `matching`: Key normalisation and roster search
//! - `tenure`: Years of service and vacation tiers
//! - `format`: Text templates for every answer
//! - `tools`: Individual MCP tools, one module per query family
//!
//! The main entry point is the `HrMcpFactory` which provides the MCP server
//! implementation and manages all tools.

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod matching;
pub mod tenure;
pub mod tools;

use std::sync::Arc;

use axum::http::request;
use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Implementation, InitializeRequestParam, InitializeResult,
        ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use tracing::info;

use crate::mcp::{
    dataset::Dataset,
    tools::{
        company,
        department::{self, DepartmentRequest},
        employee::{self, EmployeeRequest, EmployeeSearchRequest},
        policy::{self, PolicyRequest},
        respond,
        vacation::{self, VacationRequest},
    },
};

#[derive(Clone)]
pub struct HrMcpFactory {
    dataset: Arc<Dataset>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
#[allow(clippy::unused_async)]
impl HrMcpFactory {
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            tool_router: Self::tool_router(),
        }
    }

    // Thin delegating methods so the `tool_router` proc-macro (which scans
    // this impl block) can discover and register the tools. The answers
    // themselves are built in `mcp::tools::*`.

    #[tool(description = "Get general information about the company.")]
    async fn get_company_info(&self) -> Result<CallToolResult, ErrorData> {
        respond(Ok(company::get_company_info(&self.dataset)))
    }

    #[tool(
        description = "Get details about a specific HR policy (vacation_policy, sick_leave, remote_work, dress_code, benefits_overview)."
    )]
    async fn get_policy(
        &self,
        Parameters(args): Parameters<PolicyRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        respond(policy::get_policy(&self.dataset, &args.policy_name))
    }

    #[tool(description = "List all available HR policies.")]
    async fn list_policies(&self) -> Result<CallToolResult, ErrorData> {
        respond(Ok(policy::list_policies(&self.dataset)))
    }

    #[tool(
        description = "Get information about a specific department (engineering, sales, marketing, hr, finance, operations)."
    )]
    async fn get_department_info(
        &self,
        Parameters(args): Parameters<DepartmentRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        respond(department::get_department_info(&self.dataset, &args.department))
    }

    #[tool(description = "List all company departments with basic information.")]
    async fn list_departments(&self) -> Result<CallToolResult, ErrorData> {
        respond(Ok(department::list_departments(&self.dataset)))
    }

    #[tool(description = "Search for employees by name, ID, department or role.")]
    async fn search_employee(
        &self,
        Parameters(args): Parameters<EmployeeSearchRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        respond(Ok(employee::search_employee(&self.dataset, &args.search_term)))
    }

    #[tool(description = "Get detailed information about a specific employee by ID, e.g. EMP001.")]
    async fn get_employee_details(
        &self,
        Parameters(args): Parameters<EmployeeRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        respond(employee::get_employee_details(&self.dataset, &args.employee_id))
    }

    #[tool(
        description = "Calculate annual vacation days from an employee's hire date (YYYY-MM-DD) under the company's tenure-based policy."
    )]
    async fn calculate_vacation_days(
        &self,
        Parameters(args): Parameters<VacationRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        respond(vacation::calculate_vacation_days(&args.hire_date))
    }

    #[tool(description = "Get the company holiday schedule for the current year.")]
    async fn get_holiday_schedule(&self) -> Result<CallToolResult, ErrorData> {
        respond(Ok(company::get_holiday_schedule()))
    }

    #[tool(description = "Get HR department contact information.")]
    async fn get_hr_contacts(&self) -> Result<CallToolResult, ErrorData> {
        respond(Ok(company::get_hr_contacts()))
    }
}

#[tool_handler]
impl ServerHandler for HrMcpFactory {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "HR assistant for {}: company facts, HR policies, departments, employee lookup, vacation accrual, holidays and HR contacts",
                self.dataset.company().name
            )),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, ErrorData> {
        if let Some(http_request_part) = context.extensions.get::<request::Parts>() {
            let initialize_headers = &http_request_part.headers;
            let initialize_uri = &http_request_part.uri;
            info!(?initialize_headers, %initialize_uri, "initialize from http server");
        }
        Ok(self.get_info())
    }
}
