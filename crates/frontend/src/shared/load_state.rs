/// Status of one named asynchronous unit of work.
///
/// Every async operation a page owns (list fetch, detail fetch, upsert,
/// delete) carries exactly one of these at any time. Consumers must never
/// render content while `Loading` or `Error` holds for the same unit of
/// work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ok,
    Error,
}

impl LoadState {
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(LoadState::default(), LoadState::Idle);
        assert!(LoadState::default().is_idle());
    }

    #[test]
    fn test_predicates_are_exclusive() {
        for state in [
            LoadState::Idle,
            LoadState::Loading,
            LoadState::Ok,
            LoadState::Error,
        ] {
            let hits = [
                state.is_idle(),
                state.is_loading(),
                state.is_ok(),
                state.is_error(),
            ]
            .iter()
            .filter(|v| **v)
            .count();
            assert_eq!(hits, 1);
        }
    }
}
