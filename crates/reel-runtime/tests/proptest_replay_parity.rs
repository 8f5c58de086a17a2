//! Property tests: macro replay and the program loop agree.
//!
//! ## Invariants
//!
//! 1. Parity: replaying a script with [`MacroPlayer`] and dispatching the same
//!    script through a [`CarouselProgram`] on a [`ManualClock`] end in the
//!    same view.
//! 2. Frame count: a replay yields one frame per event, plus one for a
//!    non-zero idle tail.

use proptest::prelude::*;
use reel_core::{CarouselConfig, CarouselController, CarouselEvent};
use reel_runtime::{CarouselProgram, InputMacro, MacroPlayer, ManualClock};
use std::time::Duration;

fn arb_event() -> impl Strategy<Value = CarouselEvent> {
    prop_oneof![
        Just(CarouselEvent::Next),
        Just(CarouselEvent::Previous),
        (-8isize..8).prop_map(CarouselEvent::GoTo),
        prop_oneof![Just(320u32), Just(1280u32)].prop_map(|width| CarouselEvent::Resize { width }),
        Just(CarouselEvent::PointerEnter),
        Just(CarouselEvent::PointerLeave),
        (0u32..400).prop_map(|x| CarouselEvent::TouchStart { x: f64::from(x) }),
        (0u32..400).prop_map(|x| CarouselEvent::TouchMove { x: f64::from(x) }),
        Just(CarouselEvent::TouchEnd),
    ]
}

fn arb_script() -> impl Strategy<Value = InputMacro> {
    (
        prop::collection::vec((0u64..3500, arb_event()), 0..40),
        0u64..7000,
    )
        .prop_map(|(steps, tail)| {
            steps
                .into_iter()
                .fold(InputMacro::new("generated"), |script, (delay, event)| {
                    script.then(Duration::from_millis(delay), event)
                })
                .idle(Duration::from_millis(tail))
        })
}

fn controller() -> CarouselController<u32> {
    CarouselController::new((0..5).collect(), CarouselConfig::default()).expect("non-empty")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    #[test]
    fn replay_matches_program(script in arb_script()) {
        let mut replayed = controller();
        MacroPlayer::new(&script).replay(&mut replayed);

        let clock = ManualClock::new();
        let mut program = CarouselProgram::with_clock(controller(), clock.clone());
        for timed in script.events() {
            clock.advance(timed.delay);
            program.dispatch(&timed.event);
        }
        clock.advance(script.tail());
        program.pump();

        prop_assert_eq!(program.controller().view(), replayed.view());
        prop_assert_eq!(program.controller().next_deadline(), replayed.next_deadline());
    }

    #[test]
    fn replay_frame_count(script in arb_script()) {
        let frames = MacroPlayer::new(&script).replay(&mut controller());
        let expected = script.len() + usize::from(!script.tail().is_zero());
        prop_assert_eq!(frames.len(), expected);
        prop_assert!(frames.windows(2).all(|w| w[0].at <= w[1].at));
    }
}
