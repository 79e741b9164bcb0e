//! Session navigation state
//!
//! The record kept per conversation while a list is being navigated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Direction, ListNavError, Result, StaleField};
use crate::types::{ListReference, PageToken, PageTokens};

/// Navigation position of one conversation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionNavigationState {
    /// List currently being navigated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_list: Option<ListReference>,

    /// Tokens of the page last returned to the caller
    #[serde(default)]
    pub current_page_tokens: PageTokens,

    /// Token the next get page call will fetch; absent means the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upcoming_page_token: Option<PageToken>,

    /// Last modification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SessionNavigationState {
    /// Make `list_ref` the active list, forgetting the previous position
    pub fn open_list(&mut self, list_ref: ListReference) {
        self.active_list = Some(list_ref);
        self.current_page_tokens = PageTokens::default();
        self.upcoming_page_token = None;
        self.touch();
    }

    /// Record the page just returned and clear the queued token
    pub fn record_page(&mut self, tokens: PageTokens) {
        self.current_page_tokens = tokens;
        self.upcoming_page_token = None;
        self.touch();
    }

    /// Queue the neighbor of the current page in `direction`
    ///
    /// # Errors
    /// Returns `EndOfList` when the current page has no neighbor that way
    pub fn queue(&mut self, direction: Direction) -> Result<&PageToken> {
        let neighbor = match direction {
            Direction::Forward => self.current_page_tokens.next_page_token.clone(),
            Direction::Backward => self.current_page_tokens.prev_page_token.clone(),
        };
        let token = neighbor.ok_or(ListNavError::EndOfList(direction))?;
        self.touch();
        Ok(self.upcoming_page_token.insert(token))
    }

    /// Check caller-supplied arguments against this state
    ///
    /// Absent arguments are not checked. A supplied list reference must equal
    /// the active list, and a supplied page token must equal the current
    /// page's token.
    ///
    /// # Errors
    /// Returns `StaleArgument` naming the first argument that diverges
    pub fn validate_arguments(
        &self,
        list_ref: Option<&ListReference>,
        page_token: Option<&PageToken>,
    ) -> Result<()> {
        if let Some(list_ref) = list_ref
            && self.active_list.as_ref() != Some(list_ref)
        {
            return Err(ListNavError::stale(
                StaleField::ListRef,
                render(self.active_list.as_ref()),
                list_ref.to_string(),
            ));
        }

        if let Some(page_token) = page_token
            && self.current_page_tokens.current_page_token.as_ref() != Some(page_token)
        {
            return Err(ListNavError::stale(
                StaleField::PageToken,
                render(self.current_page_tokens.current_page_token.as_ref()),
                page_token.to_string(),
            ));
        }

        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

fn render<T: std::fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "<none>".to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    fn list(name: &str) -> ListReference {
        ListReference::new(name, NonZeroU32::new(10).unwrap())
    }

    fn tokens(prev: Option<&str>, current: Option<&str>, next: Option<&str>) -> PageTokens {
        PageTokens {
            prev_page_token: prev.map(PageToken::new),
            current_page_token: current.map(PageToken::new),
            next_page_token: next.map(PageToken::new),
        }
    }

    #[test]
    fn opening_a_list_resets_position() {
        let mut state = SessionNavigationState::default();
        state.open_list(list("a"));
        state.record_page(tokens(None, Some("A"), Some("B")));
        state.queue(Direction::Forward).unwrap();

        state.open_list(list("b"));
        assert_eq!(state.active_list, Some(list("b")));
        assert_eq!(state.current_page_tokens, PageTokens::default());
        assert!(state.upcoming_page_token.is_none());
    }

    #[test]
    fn queue_uses_neighbors_and_stops_at_the_ends() {
        let mut state = SessionNavigationState::default();
        state.record_page(tokens(Some("A"), Some("B"), None));

        let err = state.queue(Direction::Forward).unwrap_err();
        assert!(matches!(err, ListNavError::EndOfList(Direction::Forward)));
        assert!(state.upcoming_page_token.is_none());

        assert_eq!(state.queue(Direction::Backward).unwrap().as_str(), "A");
        assert_eq!(state.upcoming_page_token, Some(PageToken::new("A")));
    }

    #[test]
    fn validation_ignores_absent_arguments() {
        let state = SessionNavigationState::default();
        assert!(state.validate_arguments(None, None).is_ok());
    }

    #[test]
    fn validation_flags_diverging_arguments() {
        let mut state = SessionNavigationState::default();
        state.open_list(list("a"));
        state.record_page(tokens(None, Some("A"), Some("B")));

        assert!(
            state
                .validate_arguments(Some(&list("a")), Some(&PageToken::new("A")))
                .is_ok()
        );

        let err = state
            .validate_arguments(Some(&list("other")), None)
            .unwrap_err();
        assert!(matches!(
            err,
            ListNavError::StaleArgument { field: StaleField::ListRef, .. }
        ));

        let err = state
            .validate_arguments(None, Some(&PageToken::new("B")))
            .unwrap_err();
        assert!(matches!(
            err,
            ListNavError::StaleArgument { field: StaleField::PageToken, .. }
        ));
    }

    #[test]
    fn round_trips_through_json() {
        let mut state = SessionNavigationState::default();
        state.open_list(list("a").with_param("query", "jazz"));
        state.record_page(tokens(None, Some("A"), Some("B")));

        let json = serde_json::to_string(&state).unwrap();
        let back: SessionNavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
