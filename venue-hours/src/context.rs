use chrono::Duration;

use crate::localization::{Localize, NoLocation};

/// Default width of the window before an opening or a closing in which a
/// venue is reported as opening or closing soon.
pub const DEFAULT_SOON_MINUTES: i64 = 60;

/// All the context attached to some hours and that can alter their
/// evaluation.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Context<L = NoLocation> {
    /// Width of the "opening soon" and "closing soon" windows, inclusive.
    pub soon: Duration,
    pub locale: L,
}

impl<L> Context<L> {
    /// Change the width of the "opening soon" and "closing soon" windows.
    ///
    /// ```
    /// use chrono::Duration;
    /// use venue_hours::Context;
    ///
    /// let ctx = Context::default().with_soon(Duration::minutes(30));
    /// assert_eq!(ctx.soon, Duration::minutes(30));
    /// ```
    pub fn with_soon(self, soon: Duration) -> Self {
        Self { soon, ..self }
    }

    /// Attach a new locale component to this context.
    pub fn with_locale<L2: Localize>(self, locale: L2) -> Context<L2> {
        Context { soon: self.soon, locale }
    }

    /// Width of the soon windows in whole minutes, never negative.
    pub(crate) fn soon_minutes(&self) -> i32 {
        self.soon.num_minutes().clamp(0, i64::from(i32::MAX)) as i32
    }
}

impl Default for Context<NoLocation> {
    fn default() -> Self {
        Self { soon: Duration::minutes(DEFAULT_SOON_MINUTES), locale: NoLocation }
    }
}
