//! Reducer contract
//!
//! A reducer is a pure function from (state, action) to the next state. Plain
//! closures `Fn(&S, &A) -> S` are reducers as-is; use [`fallible`] for reducers
//! that can reject an action.

use std::marker::PhantomData;

/// Produces the next state from the current state and an action
pub trait Reducer<S, A>: Send + Sync {
    fn reduce(&self, state: &S, action: &A) -> anyhow::Result<S>;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(&S, &A) -> S + Send + Sync,
{
    fn reduce(&self, state: &S, action: &A) -> anyhow::Result<S> {
        Ok(self(state, action))
    }
}

/// Reducer adapter for closures returning `Result`
pub struct Fallible<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

/// Wrap a fallible closure so it can be used as a [`Reducer`]
///
/// When the closure returns `Err`, the store keeps its previous state and
/// notifies no subscribers.
pub fn fallible<S, A, E, F>(f: F) -> Fallible<F, E>
where
    F: Fn(&S, &A) -> Result<S, E> + Send + Sync,
    E: Into<anyhow::Error>,
{
    Fallible {
        f,
        _error: PhantomData,
    }
}

impl<S, A, E, F> Reducer<S, A> for Fallible<F, E>
where
    F: Fn(&S, &A) -> Result<S, E> + Send + Sync,
    E: Into<anyhow::Error>,
{
    fn reduce(&self, state: &S, action: &A) -> anyhow::Result<S> {
        (self.f)(state, action).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_reducer() {
        let reducer = |state: &i64, delta: &i64| state + delta;
        assert_eq!(reducer.reduce(&1, &2).unwrap(), 3);
    }

    #[test]
    fn test_fallible_reducer() {
        let reducer = fallible(|state: &i64, delta: &i64| {
            if *delta < 0 {
                anyhow::bail!("negative delta");
            }
            Ok(state + delta)
        });
        assert_eq!(reducer.reduce(&1, &2).unwrap(), 3);
        assert_eq!(
            reducer.reduce(&1, &-2).unwrap_err().to_string(),
            "negative delta"
        );
    }
}
