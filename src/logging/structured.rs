//! Structured logging utilities.
//!
//! Log lines read `[render=rnd-1a2b3c4d] [record=<id>] EVENT key=value ...`.

use std::fmt;

/// Logging context for one render or console action.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub scope_id: String,
    pub record_id: Option<String>,
    scope: &'static str,
}

impl LogContext {
    /// Context for a report render.
    pub fn render(render_id: &str) -> Self {
        Self {
            scope_id: render_id.to_string(),
            record_id: None,
            scope: "render",
        }
    }

    /// Context for a console action (load, delete, sign in ...).
    pub fn action(action: &str) -> Self {
        Self {
            scope_id: action.to_string(),
            record_id: None,
            scope: "action",
        }
    }

    pub fn with_record(&self, record_id: &str) -> Self {
        Self {
            scope_id: self.scope_id.clone(),
            record_id: Some(record_id.to_string()),
            scope: self.scope,
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record_id {
            Some(rid) => write!(f, "[{}={}] [record={}]", self.scope, self.scope_id, rid),
            None => write!(f, "[{}={}]", self.scope, self.scope_id),
        }
    }
}

/// Log an event with context and `key=value` pairs at the given level.
///
/// ```ignore
/// log_event!(Info, ctx, "RECORDS_LOADED", table = "inspections", count = 12);
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:ident, $ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::log!(
            log::Level::$level,
            "{} {}{}",
            $ctx,
            $event,
            format_args!(concat!($(" ", stringify!($key), "={:?}"),*) $(, $value)*)
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::render("rnd-123");
        assert_eq!(format!("{}", ctx), "[render=rnd-123]");

        let ctx_with_record = ctx.with_record("insp-456");
        assert_eq!(
            format!("{}", ctx_with_record),
            "[render=rnd-123] [record=insp-456]"
        );
    }

    #[test]
    fn test_action_context_display() {
        let ctx = LogContext::action("delete_inspection").with_record("42");
        assert_eq!(format!("{}", ctx), "[action=delete_inspection] [record=42]");
    }

    #[test]
    fn test_log_event_expands() {
        let ctx = LogContext::render("rnd-1");
        log_event!(Debug, ctx, "TEST_EVENT", kind = "quality", bytes = 10usize);
        log_event!(Info, ctx, "TEST_EVENT_BARE");
    }
}
