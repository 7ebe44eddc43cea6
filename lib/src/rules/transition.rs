use crate::cells::State;

/// Whether `n` is a prime number.
///
/// Numbers less than 2 are never prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Whether `n` is a positive power of two.
#[inline]
pub fn is_power_of_two(n: i64) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// The state of a cell in the next generation, given its current state
/// and its neighbor sum.
///
/// Within each state, the conditions are checked in order and the first
/// one that holds wins. Any `i32` is accepted, though a real neighbor
/// sum always lies in `-16..=16`.
pub fn transition(state: State, sum: i32) -> State {
    let wide = i64::from(sum);
    match state {
        State::HealthyPositive => {
            if is_power_of_two(wide) {
                State::Dead
            } else if sum < 10 {
                State::WeakPositive
            } else {
                State::HealthyPositive
            }
        }
        State::WeakPositive => {
            if sum <= 0 {
                State::Dead
            } else if sum >= 8 {
                State::HealthyPositive
            } else {
                State::WeakPositive
            }
        }
        State::Dead => {
            if is_prime(wide.abs()) && sum <= 0 {
                State::WeakNegative
            } else if is_prime(wide) && sum > 0 {
                State::WeakPositive
            } else {
                State::Dead
            }
        }
        State::WeakNegative => {
            if sum >= 1 {
                State::Dead
            } else if sum <= -8 {
                State::HealthyNegative
            } else {
                State::WeakNegative
            }
        }
        State::HealthyNegative => {
            // Unlike `O`, the death check here takes the absolute value.
            if is_power_of_two(wide.abs()) {
                State::Dead
            } else if sum > -10 {
                State::WeakNegative
            } else {
                State::HealthyNegative
            }
        }
    }
}
