use yew::prelude::*;
use gloo_timers::callback::Interval;

use crate::accessibility::effects::CounterTarget;

const TICK_MS: u32 = 40;
// About 2.2 seconds at 40ms per tick.
const TICKS: u32 = 55;

/// Text shown after `tick` of `ticks` steps, easing out towards the end value.
pub fn progress_text(counter: &CounterTarget, tick: u32, ticks: u32) -> String {
    if ticks == 0 || tick >= ticks {
        return counter.final_text();
    }
    let t = tick as f64 / ticks as f64;
    let eased = 1.0 - (1.0 - t) * (1.0 - t);
    let shown = (counter.value as f64 * eased).floor() as u32;
    format!("{}{}", shown, counter.suffix)
}

/// One run of the count-up animation.
pub struct CountUp {
    counter: CounterTarget,
    tick: u32,
    ticks: u32,
}

impl CountUp {
    pub fn new(counter: CounterTarget, ticks: u32) -> Self {
        Self {
            counter,
            tick: 0,
            ticks,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.tick > self.ticks
    }

    /// Text for the next frame, or `None` once the end value was shown.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        let text = progress_text(&self.counter, self.tick, self.ticks);
        self.tick += 1;
        Some(text)
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub counter: CounterTarget,
    pub label: AttrValue,
    pub frozen: bool,
}

/// Counts up by writing straight to its element, so the accessibility
/// engine can snap it to the end value without fighting the renderer.
/// The element has no children of its own for the same reason.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let ticker = use_mut_ref(|| None::<Interval>);
    let counter = props.counter;

    {
        let node = node.clone();
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |frozen: &bool| {
                if !*frozen {
                    let slot = ticker.clone();
                    let mut count = CountUp::new(counter, TICKS);
                    *ticker.borrow_mut() = Some(Interval::new(TICK_MS, move || {
                        let Some(text) = count.advance() else {
                            return;
                        };
                        if let Some(element) = node.get() {
                            element.set_text_content(Some(&text));
                        }
                        if count.is_finished() {
                            // Dropping the interval cancels it.
                            let done = slot.borrow_mut().take();
                            drop(done);
                        }
                    }));
                }
                move || {
                    let running = ticker.borrow_mut().take();
                    drop(running);
                }
            },
            props.frozen,
        );
    }

    html! {
        <div class="stat-item">
            <div ref={node} id={counter.element_id} class="stat-number" aria-live="polite"></div>
            <div class="stat-label">{props.label.to_string()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTER: CounterTarget = CounterTarget {
        element_id: "stat-test",
        value: 284,
        suffix: "+",
    };

    #[test]
    fn starts_at_zero_and_ends_at_target() {
        assert_eq!(progress_text(&COUNTER, 0, TICKS), "0+");
        assert_eq!(progress_text(&COUNTER, TICKS, TICKS), "284+");
        assert_eq!(progress_text(&COUNTER, TICKS + 10, TICKS), "284+");
    }

    #[test]
    fn count_up_stops_after_showing_the_end_value() {
        let mut count = CountUp::new(COUNTER, TICKS);
        let frames: Vec<String> = std::iter::from_fn(|| count.advance()).collect();
        assert_eq!(frames.len(), (TICKS + 1) as usize);
        assert_eq!(frames.first().map(String::as_str), Some("0+"));
        assert_eq!(frames.last().map(String::as_str), Some("284+"));
        assert!(count.is_finished());
        assert_eq!(count.advance(), None);
    }

    #[test]
    fn count_up_is_running_until_the_last_frame() {
        let mut count = CountUp::new(COUNTER, 3);
        for _ in 0..3 {
            count.advance();
            assert!(!count.is_finished());
        }
        count.advance();
        assert!(count.is_finished());
    }

    #[test]
    fn progress_never_goes_backwards() {
        let values: Vec<u32> = (0..=TICKS)
            .map(|tick| {
                progress_text(&COUNTER, tick, TICKS)
                    .trim_end_matches('+')
                    .parse()
                    .unwrap()
            })
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values[(TICKS / 2) as usize] > COUNTER.value / 2);
    }
}
