use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use yew::prelude::*;

use crate::config;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Whole days/hours/minutes/seconds left until the festival starts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a millisecond distance into display units. Negative
    /// distances clamp to zero, the terminal display state.
    pub fn from_millis(distance: i64) -> Remaining {
        if distance < 0 {
            return Remaining::ZERO;
        }
        Remaining {
            days: distance / MS_PER_DAY,
            hours: distance % MS_PER_DAY / MS_PER_HOUR,
            minutes: distance % MS_PER_HOUR / MS_PER_MINUTE,
            seconds: distance % MS_PER_MINUTE / MS_PER_SECOND,
        }
    }
}

#[function_component(Countdown)]
pub fn countdown() -> Html {
    let remaining = use_state(|| {
        Remaining::from_millis(config::festival_start_ms() - Utc::now().timestamp_millis())
    });

    {
        let remaining = remaining.clone();
        use_effect_with_deps(
            move |_| {
                // Handle so the tick can stop its own interval once the date
                // has passed.
                let interval_handle: Rc<RefCell<Option<gloo_timers::callback::Interval>>> =
                    Rc::new(RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();

                let target = config::festival_start_ms();
                let interval = gloo_timers::callback::Interval::new(1_000, move || {
                    let distance = target - Utc::now().timestamp_millis();
                    if distance < 0 {
                        remaining.set(Remaining::ZERO);
                        if let Some(interval) = interval_handle.borrow_mut().take() {
                            drop(interval);
                        }
                    } else {
                        remaining.set(Remaining::from_millis(distance));
                    }
                });
                *interval_handle_clone.borrow_mut() = Some(interval);

                move || {
                    if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (),
        );
    }

    let value = *remaining;

    html! {
        <div class="countdown">
            <div class="countdown-unit">
                <span class="countdown-value">{ value.days }</span>
                <span class="countdown-label">{"Days"}</span>
            </div>
            <div class="countdown-unit">
                <span class="countdown-value">{ value.hours }</span>
                <span class="countdown-label">{"Hours"}</span>
            </div>
            <div class="countdown-unit">
                <span class="countdown-value">{ value.minutes }</span>
                <span class="countdown-label">{"Minutes"}</span>
            </div>
            <div class="countdown-unit">
                <span class="countdown-value">{ value.seconds }</span>
                <span class="countdown-label">{"Seconds"}</span>
            </div>
            <style>
                {r#"
                .countdown {
                    display: flex;
                    gap: 1.2rem;
                    justify-content: center;
                    margin: 2rem 0;
                }

                .countdown-unit {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    min-width: 82px;
                    padding: 0.9rem 0.6rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.06);
                    border: 1px solid rgba(255, 184, 76, 0.25);
                }

                .countdown-value {
                    font-size: 2.2rem;
                    font-weight: 700;
                    color: #ffb84c;
                    font-variant-numeric: tabular-nums;
                }

                .countdown-label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    color: #bbb;
                }

                @media (max-width: 520px) {
                    .countdown {
                        gap: 0.6rem;
                    }

                    .countdown-unit {
                        min-width: 64px;
                    }

                    .countdown-value {
                        font-size: 1.6rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_one_of_each_unit() {
        // 1d 1h 1m 1s
        let remaining = Remaining::from_millis(90_061_000);
        assert_eq!(
            remaining,
            Remaining {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            }
        );
    }

    #[test]
    fn sub_second_distance_shows_zero() {
        assert_eq!(Remaining::from_millis(999), Remaining::ZERO);
    }

    #[test]
    fn exact_day_boundary() {
        let remaining = Remaining::from_millis(86_400_000);
        assert_eq!(
            remaining,
            Remaining {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0,
            }
        );
    }

    #[test]
    fn negative_distance_clamps_to_terminal_zero() {
        assert_eq!(Remaining::from_millis(-1), Remaining::ZERO);
        assert_eq!(Remaining::from_millis(i64::MIN), Remaining::ZERO);
    }

    #[test]
    fn units_stay_within_range() {
        let remaining = Remaining::from_millis(123_456_789);
        assert!(remaining.hours < 24);
        assert!(remaining.minutes < 60);
        assert!(remaining.seconds < 60);
    }
}
