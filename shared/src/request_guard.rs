//! Request generations for read-only views.
//!
//! Each fetch that fills a view is tagged with a token from a single
//! monotonic counter. Only the latest token issued for a view is current; a
//! response carrying an older token was superseded and must be dropped.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Accounts,
    TypeValues,
    MonthlyValues,
    Transactions,
    /// The account fetched to fill the edit form
    EditAccount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestTracker {
    next: u64,
    latest: HashMap<ViewKind, RequestToken>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request for `view`, superseding any in flight
    pub fn issue(&mut self, view: ViewKind) -> RequestToken {
        self.next += 1;
        let token = RequestToken(self.next);
        self.latest.insert(view, token);
        token
    }

    /// Supersede whatever is in flight for `view` without starting a request
    pub fn invalidate(&mut self, view: ViewKind) {
        self.issue(view);
    }

    pub fn is_current(&self, view: ViewKind, token: RequestToken) -> bool {
        self.latest.get(&view) == Some(&token)
    }
}
