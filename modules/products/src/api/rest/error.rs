use rest_problem::Problem;

use crate::domain::error::DomainError;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Map domain error to RFC9457 Problem
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    // Extract trace ID from current tracing span if available
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::ProductNotFound { .. } => Problem::not_found(PRODUCT_NOT_FOUND),
        DomainError::Validation { violations } => Problem::validation(violations.clone()),
        DomainError::Storage { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = %e, "Storage error occurred");
            Problem::internal("An internal storage error occurred")
        }
    };

    let problem = problem.with_instance(instance);
    match trace_id {
        Some(id) => problem.with_trace_id(id),
        None => problem,
    }
}
