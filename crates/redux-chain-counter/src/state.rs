use serde::Serialize;

/// Root application state, one field per slice
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RootState {
    pub counter: CounterState,
}

impl RootState {
    pub fn new(initial_value: i64) -> Self {
        Self {
            counter: CounterState {
                value: initial_value,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CounterState {
    pub value: i64,
}
