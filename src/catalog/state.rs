//! List View State

use crate::error::AppResult;

/// `Loading → Ready | Error`; a manual reload re-enters `Loading`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListPhase {
    #[default]
    Loading,
    Ready,
    Error(String),
}

impl ListPhase {
    pub fn from_result<T>(result: &AppResult<T>) -> Self {
        match result {
            Ok(_) => ListPhase::Ready,
            Err(e) => ListPhase::Error(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListPhase::Loading)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn css_class(&self) -> &'static str {
        match self {
            ViewMode::Grid => "sweet-grid",
            ViewMode::List => "sweet-rows",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_phase_from_result() {
        assert_eq!(ListPhase::from_result(&Ok::<_, AppError>(())), ListPhase::Ready);
        let failed: AppResult<()> = Err(AppError::Network("offline".to_string()));
        assert_eq!(
            ListPhase::from_result(&failed),
            ListPhase::Error("Could not reach the server. Please try again.".to_string())
        );
        assert!(ListPhase::default().is_loading());
    }
}
