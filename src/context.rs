use std::any::type_name;
use std::fmt;

use tracing::{debug, trace};

use crate::errors::{MatchError, Result};
use crate::narrow::Narrow;

/// Starts a pattern match over `subject`.
///
/// The returned context has no result type yet (`()`); call
/// [`PatternMatch::returns`] before the first clause to produce a value.
pub fn pattern_match<S: ?Sized>(subject: &S) -> PatternMatch<'_, S> {
    PatternMatch::new(subject)
}

/// Extension entry point: `subject.pattern_match()`.
pub trait Matchable {
    fn pattern_match(&self) -> PatternMatch<'_, Self> {
        PatternMatch::new(self)
    }
}

impl<T: ?Sized> Matchable for T {}

/// The match context threaded through a chain of clauses.
///
/// Clauses are evaluated eagerly, in call order. The first clause whose
/// condition holds resolves the context and runs its handler; every clause
/// after that is a pass-through. Resolution happens at most once.
pub struct PatternMatch<'a, S: ?Sized, R = ()> {
    subject: &'a S,
    resolved: bool,
    result: Option<R>,
}

impl<'a, S: ?Sized, R> PatternMatch<'a, S, R> {
    pub(crate) fn new(subject: &'a S) -> Self {
        Self {
            subject,
            resolved: false,
            result: None,
        }
    }

    /// The subject being matched.
    pub fn subject(&self) -> &'a S {
        self.subject
    }

    /// Whether some clause has already matched.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Changes the result type of the match.
    ///
    /// Fails with [`MatchError::InvalidState`] once a clause has matched.
    pub fn returns<N>(self) -> Result<PatternMatch<'a, S, N>> {
        if self.resolved {
            debug!(from = type_name::<R>(), to = type_name::<N>(), "refusing to retype a resolved match");
            return Err(MatchError::InvalidState(
                "cannot change result type once pattern has been matched",
            ));
        }
        Ok(PatternMatch::new(self.subject))
    }

    /// Value equality clause producing a result.
    ///
    /// Matches when the subject narrows to `M` and equals `value`.
    pub fn case_value<M, F>(mut self, value: &M, function: F) -> Self
    where
        S: Narrow<M>,
        M: PartialEq + ?Sized,
        F: FnOnce(&M) -> R,
    {
        if let Some(matched) = self.unresolved().and_then(Narrow::<M>::narrow).filter(|m| *m == value) {
            self.resolve("value");
            self.result = Some(function(matched));
        }
        self
    }

    /// Value equality clause running a side effect.
    pub fn case_value_do<M, A>(mut self, value: &M, action: A) -> Self
    where
        S: Narrow<M>,
        M: PartialEq + ?Sized,
        A: FnOnce(&M),
    {
        if let Some(matched) = self.unresolved().and_then(Narrow::<M>::narrow).filter(|m| *m == value) {
            self.resolve("value");
            action(matched);
        }
        self
    }

    /// Predicate clause producing a result.
    ///
    /// The predicate only ever sees subjects that narrow to `M`.
    pub fn case_when<M, P, F>(mut self, predicate: P, function: F) -> Self
    where
        S: Narrow<M>,
        M: ?Sized,
        P: FnOnce(&M) -> bool,
        F: FnOnce(&M) -> R,
    {
        if let Some(matched) = self.unresolved().and_then(Narrow::<M>::narrow) {
            if predicate(matched) {
                self.resolve("predicate");
                self.result = Some(function(matched));
            }
        }
        self
    }

    /// Predicate clause running a side effect.
    pub fn case_when_do<M, P, A>(mut self, predicate: P, action: A) -> Self
    where
        S: Narrow<M>,
        M: ?Sized,
        P: FnOnce(&M) -> bool,
        A: FnOnce(&M),
    {
        if let Some(matched) = self.unresolved().and_then(Narrow::<M>::narrow) {
            if predicate(matched) {
                self.resolve("predicate");
                action(matched);
            }
        }
        self
    }

    /// Type clause producing a result; `M` is usually taken from the
    /// closure's parameter annotation: `.case(|dog: &Dog| ...)`.
    pub fn case<M, F>(mut self, function: F) -> Self
    where
        S: Narrow<M>,
        M: ?Sized,
        F: FnOnce(&M) -> R,
    {
        if let Some(matched) = self.unresolved().and_then(Narrow::<M>::narrow) {
            self.resolve("type");
            self.result = Some(function(matched));
        }
        self
    }

    /// Type clause running a side effect.
    pub fn case_do<M, A>(mut self, action: A) -> Self
    where
        S: Narrow<M>,
        M: ?Sized,
        A: FnOnce(&M),
    {
        if let Some(matched) = self.unresolved().and_then(Narrow::<M>::narrow) {
            self.resolve("type");
            action(matched);
        }
        self
    }

    /// Default clause producing a result from the unnarrowed subject.
    pub fn otherwise<F>(mut self, function: F) -> Self
    where
        F: FnOnce(&S) -> R,
    {
        if !self.resolved {
            self.resolve("otherwise");
            self.result = Some(function(self.subject));
        }
        self
    }

    /// Default clause running a side effect.
    pub fn otherwise_do<A>(mut self, action: A) -> Self
    where
        A: FnOnce(&S),
    {
        if !self.resolved {
            self.resolve("otherwise");
            action(self.subject);
        }
        self
    }

    /// Fails with [`MatchError::MatchFailure`] if nothing has matched yet.
    pub fn otherwise_throw(self) -> Result<Self> {
        if !self.resolved {
            debug!(subject = type_name::<S>(), "pattern did not match any cases");
            return Err(MatchError::MatchFailure);
        }
        Ok(self)
    }

    /// The value produced by the matching clause.
    ///
    /// `None` when nothing matched, or when the matching clause was an action.
    pub fn result(self) -> Option<R> {
        self.result
    }

    /// The produced value, or `R::default()` when there is none.
    pub fn result_or_default(self) -> R
    where
        R: Default,
    {
        self.result.unwrap_or_default()
    }

    fn unresolved(&self) -> Option<&'a S> {
        if self.resolved {
            None
        } else {
            Some(self.subject)
        }
    }

    fn resolve(&mut self, clause: &'static str) {
        trace!(clause, subject = type_name::<S>(), result = type_name::<R>(), "pattern resolved");
        self.resolved = true;
    }
}

impl<S: ?Sized, R: fmt::Debug> fmt::Debug for PatternMatch<'_, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternMatch")
            .field("subject", &type_name::<S>())
            .field("resolved", &self.resolved)
            .field("result", &self.result)
            .finish()
    }
}
