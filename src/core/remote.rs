//! View state for remotely loaded collections
//!
//! Each UI region that depends on an asynchronous load holds exactly one
//! `RemoteData` value, so the loading/error/empty/list displays are mutually
//! exclusive by construction rather than by juggling booleans.

/// Lifecycle of one remotely fetched value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RemoteData<T> {
    /// No fetch issued yet (or the region was invalidated)
    #[default]
    NotAsked,
    /// A fetch is in flight
    Loading,
    /// The latest fetch settled with an error (display string)
    Failed(String),
    /// The latest fetch settled successfully
    Loaded(T),
}

impl<T> RemoteData<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RemoteData::Failed(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteData::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The loaded value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            RemoteData::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            RemoteData::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Reset to `NotAsked`, discarding any loaded value or error
    pub fn invalidate(&mut self) {
        *self = RemoteData::NotAsked;
    }
}

impl<T> RemoteData<Vec<T>> {
    /// Loaded with zero items
    pub fn is_empty_list(&self) -> bool {
        matches!(self, RemoteData::Loaded(items) if items.is_empty())
    }

    /// Loaded with at least one item
    pub fn is_nonempty_list(&self) -> bool {
        matches!(self, RemoteData::Loaded(items) if !items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_asked() {
        let data: RemoteData<Vec<i32>> = RemoteData::default();
        assert_eq!(data, RemoteData::NotAsked);
    }

    #[test]
    fn test_states_are_mutually_exclusive() {
        let states: Vec<RemoteData<Vec<i32>>> = vec![
            RemoteData::NotAsked,
            RemoteData::Loading,
            RemoteData::Failed("boom".into()),
            RemoteData::Loaded(vec![]),
            RemoteData::Loaded(vec![1]),
        ];

        for state in &states {
            let flags = [
                state.is_loading(),
                state.is_failed(),
                state.is_empty_list(),
                state.is_nonempty_list(),
            ];
            let active = flags.iter().filter(|f| **f).count();
            assert!(active <= 1, "more than one display flag set for {state:?}");
        }
    }

    #[test]
    fn test_error_accessor() {
        let data: RemoteData<Vec<i32>> = RemoteData::Failed("posts load failed".into());
        assert_eq!(data.error(), Some("posts load failed"));
        assert!(data.value().is_none());
    }

    #[test]
    fn test_invalidate() {
        let mut data = RemoteData::Loaded(vec![1, 2, 3]);
        data.invalidate();
        assert_eq!(data, RemoteData::NotAsked);
    }

    #[test]
    fn test_value_mut() {
        let mut data = RemoteData::Loaded(vec![1]);
        data.value_mut().unwrap().push(2);
        assert_eq!(data.value(), Some(&vec![1, 2]));
    }
}
