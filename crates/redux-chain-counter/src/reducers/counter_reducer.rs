use crate::actions::{DECREMENT, INCREMENT, INCREMENT_BY_AMOUNT};
use crate::state::CounterState;
use anyhow::{bail, Context, Result};
use redux_chain::{Action, AnyAction};

/// Reducer for the counter slice
///
/// Unknown actions leave the state as it is.
pub fn reduce(state: &CounterState, action: &AnyAction) -> Result<CounterState> {
    let value = match action.action_type() {
        INCREMENT => add(state.value, 1)?,
        DECREMENT => add(state.value, -1)?,
        INCREMENT_BY_AMOUNT => {
            let Some(amount) = action.payload_i64() else {
                bail!("{} expects an integer payload, got {:?}", INCREMENT_BY_AMOUNT, action.payload);
            };
            add(state.value, amount)?
        }
        _ => return Ok(state.clone()),
    };

    Ok(CounterState { value })
}

fn add(value: i64, amount: i64) -> Result<i64> {
    value
        .checked_add(amount)
        .with_context(|| format!("counter overflow adding {} to {}", amount, value))
}
