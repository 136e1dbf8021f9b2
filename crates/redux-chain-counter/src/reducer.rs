use crate::reducers::counter_reducer;
use crate::state::RootState;
use redux_chain::AnyAction;

/// Root reducer - hands each slice its part of the state
pub fn reduce(state: &RootState, action: &AnyAction) -> anyhow::Result<RootState> {
    Ok(RootState {
        counter: counter_reducer::reduce(&state.counter, action)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::increment;

    #[test]
    fn test_root_reducer_delegates_to_counter() {
        let state = reduce(&RootState::new(4), &increment()).unwrap();
        assert_eq!(state, RootState::new(5));
    }
}
