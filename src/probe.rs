//! Running user code and turning whatever it raised into a [`Raised`] value.
//!
//! User code raises either by returning `Err(..)` or by panicking. Panics are
//! caught with [`catch_unwind`](panic::catch_unwind) and their payload is
//! classified by [`classify_payload`].
//!
//! While a probe is active on a thread, the default panic hook output is
//! suppressed for that thread. Other threads keep their usual panic output.

use std::{
    any::Any,
    cell::Cell,
    panic::{self, AssertUnwindSafe},
    sync::Once,
};

use crate::{
    assert::AssertionFailure,
    error::{ErrorKind, Raised, TestError},
    test::BodyResult,
};

thread_local! {
    static PROBE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

static INSTALL_HOOK: Once = Once::new();

/// Keeps panic output of the current thread quiet while alive.
struct QuietPanics;

impl QuietPanics {
    fn enter() -> Self {
        INSTALL_HOOK.call_once(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                if PROBE_DEPTH.with(Cell::get) == 0 {
                    previous(info);
                }
            }));
        });
        PROBE_DEPTH.with(|depth| depth.set(depth.get() + 1));
        QuietPanics
    }
}

impl Drop for QuietPanics {
    fn drop(&mut self) {
        PROBE_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Classify a panic payload.
///
/// Payloads raised with [`panic_any`](std::panic::panic_any) that carry a
/// [`Raised`], [`AssertionFailure`] or [`TestError`] keep their meaning.
/// The common payloads of `panic!` (`&'static str` and `String`) become
/// [`ErrorKind::Panic`] errors. Everything else is [`Raised::Unknown`].
pub fn classify_payload(payload: Box<dyn Any + Send + 'static>) -> Raised {
    payload
        .downcast::<Raised>()
        .map(|raised| *raised)
        .or_else(|payload| payload.downcast::<AssertionFailure>().map(|f| Raised::Assertion(*f)))
        .or_else(|payload| payload.downcast::<TestError>().map(|e| Raised::Error(*e)))
        .or_else(|payload| {
            payload
                .downcast::<&'static str>()
                .map(|s| Raised::Error(TestError::new(ErrorKind::Panic, *s)))
        })
        .or_else(|payload| {
            payload
                .downcast::<String>()
                .map(|s| Raised::Error(TestError::new(ErrorKind::Panic, *s)))
        })
        .unwrap_or(Raised::Unknown)
}

/// Run `f`, converting a panic into a [`Raised`] value.
pub fn catch_value<F, T>(f: F) -> Result<T, Raised>
where
    F: FnOnce() -> T,
{
    let _quiet = QuietPanics::enter();
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(classify_payload)
}

/// Run a test body or probed closure and report what it raised, if anything.
pub fn catch<F, R>(f: F) -> Result<(), Raised>
where
    F: FnOnce() -> R,
    R: Into<BodyResult>,
{
    catch_value(|| -> BodyResult { f().into() }).and_then(|BodyResult(result)| result)
}
