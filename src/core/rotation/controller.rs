//=========================================================================
// Rotation Controller
//=========================================================================
//
// Finite-state interaction model driving the tetracube's yaw angle.
//
// Architecture:
//   PointerEvent → on_pointer_*() → Phase transitions → tick() → yaw
//
// Phases:
// ```text
//            down(hit)                  up, |v| > threshold
//   Passive ───────────► Dragging ──────────────────────► Inertia
//      ▲                    │                                 │
//      │   up, |v| ≤ threshold                  |v| < threshold
//      └────────────────────┴─────────────────────────────────┘
// ```
//
// `Passive` covers both the cooling-off period after an interaction and
// steady auto-rotation; the two are distinguished only by elapsed idle
// time measured against `auto_resume_delay_ms`.
//
// Preconditions (caller contract, not handled errors):
// - Timestamps are non-negative and monotonically non-decreasing across
//   the pointer and tick streams. Out-of-order timestamps are undefined
//   behavior territory; the shared `FrameClock` epoch guarantees this
//   when the bundled platform layer is used.
// - Non-finite inputs are clamped defensively so a single bad sample
//   cannot permanently corrupt the yaw, but they are still a caller bug.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, trace};

//=== Internal Imports ====================================================

use super::config::{ConfigError, RotationConfig};

//=== Constants ===========================================================

/// Hard cap on flick velocity magnitude, in rad/s.
///
/// A pointer sample pair arriving within a sub-millisecond window can
/// produce an absurd instantaneous velocity; anything above roughly five
/// revolutions per second reads as a glitch rather than a gesture.
const MAX_ANGULAR_VELOCITY: f64 = 10.0 * std::f64::consts::PI;

//=== Phase ===============================================================

/// Current control regime of the rotation interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pointer captured; yaw follows horizontal pointer motion directly.
    Dragging,

    /// Post-release coasting; velocity decays exponentially toward zero.
    Inertia,

    /// No interaction in flight. Auto-rotation applies once the idle
    /// delay has elapsed.
    Passive,
}

//=== RotationController ==================================================

/// Owns all interaction state and produces the yaw applied to the shape.
///
/// Three entry points are driven by the pointer stream
/// ([`on_pointer_down`](Self::on_pointer_down),
/// [`on_pointer_move`](Self::on_pointer_move),
/// [`on_pointer_up`](Self::on_pointer_up) /
/// [`on_pointer_cancel`](Self::on_pointer_cancel)) and one by the frame
/// clock ([`tick`](Self::tick)). All state is private; the controller is
/// the single writer.
pub struct RotationController {
    config: RotationConfig,

    //--- Interaction State ------------------------------------------------
    phase: Phase,
    yaw: f64,
    angular_velocity: f64,

    //--- Drag Bookkeeping (valid only while Dragging) ----------------------
    last_pointer_x: f64,
    last_pointer_time: f64,

    //--- Timing -------------------------------------------------------------
    last_interaction_time: f64,
    last_tick_time: Option<f64>,
}

impl RotationController {
    //--- Construction -----------------------------------------------------

    /// Creates a controller with a validated configuration.
    ///
    /// Starts in `Passive` with yaw 0 and auto-rotation eligible
    /// immediately (no cooling-off period before the first interaction).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any numeric tunable is non-finite or
    /// negative.
    pub fn new(config: RotationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            phase: Phase::Passive,
            yaw: 0.0,
            angular_velocity: 0.0,
            last_pointer_x: 0.0,
            last_pointer_time: 0.0,
            // -inf makes every `now - last_interaction_time` exceed the
            // resume delay, so auto-rotation runs from the first tick.
            last_interaction_time: f64::NEG_INFINITY,
            last_tick_time: None,
        })
    }

    //--- Pointer Entry Points ----------------------------------------------

    /// Begins a drag session if the pointer-down hit the shape.
    ///
    /// `hit_target` comes from the external hit-test collaborator; this
    /// controller knows nothing about 3D geometry. A miss leaves all
    /// state untouched. Returns `true` when a drag session started (the
    /// "drag active" signal, e.g. for cursor styling).
    pub fn on_pointer_down(&mut self, x: f64, timestamp: f64, hit_target: bool) -> bool {
        if !hit_target {
            trace!(target: "core::rotation", "pointer down missed target, ignoring");
            return false;
        }

        debug!(target: "core::rotation", "drag session started at x={:.1}", x);

        self.phase = Phase::Dragging;
        self.angular_velocity = 0.0;
        self.last_pointer_x = x;
        self.last_pointer_time = timestamp;
        self.last_interaction_time = timestamp;
        true
    }

    /// Advances yaw by the horizontal pointer delta while dragging.
    ///
    /// Velocity is recomputed from the most recent sample pair only —
    /// the final flick speed dominates the inertia outcome, so no
    /// smoothing across the gesture is applied.
    pub fn on_pointer_move(&mut self, x: f64, timestamp: f64) {
        if self.phase != Phase::Dragging {
            return;
        }

        let dx = x - self.last_pointer_x;
        let dt = (timestamp - self.last_pointer_time) / 1000.0;

        // dt <= 0 (coincident or duplicated samples) contributes nothing;
        // a NaN dx or dt fails the comparison and is likewise skipped.
        if dt > 0.0 && dx.is_finite() {
            let delta_yaw = dx * self.config.drag_sensitivity;
            self.yaw += delta_yaw;
            self.angular_velocity =
                (delta_yaw / dt).clamp(-MAX_ANGULAR_VELOCITY, MAX_ANGULAR_VELOCITY);
        }

        self.last_pointer_x = x;
        self.last_pointer_time = timestamp;
        self.last_interaction_time = timestamp;
    }

    /// Ends the drag session, carrying velocity into inertia if the
    /// release was fast enough.
    pub fn on_pointer_up(&mut self, timestamp: f64) {
        if self.phase != Phase::Dragging {
            return;
        }

        if self.angular_velocity.abs() > self.config.min_velocity_threshold {
            debug!(
                target: "core::rotation",
                "release with velocity {:.3} rad/s, entering inertia",
                self.angular_velocity
            );
            self.phase = Phase::Inertia;
        } else {
            debug!(target: "core::rotation", "release below threshold, going passive");
            self.angular_velocity = 0.0;
            self.phase = Phase::Passive;
            self.last_interaction_time = timestamp;
        }
    }

    /// Treats an interrupted pointer (capture loss, cursor left the
    /// window) exactly like a release, so a drag can never get stuck.
    pub fn on_pointer_cancel(&mut self, timestamp: f64) {
        self.on_pointer_up(timestamp);
    }

    //--- Frame Tick ---------------------------------------------------------

    /// Advances the simulation by one frame and returns the current yaw.
    ///
    /// `now` is a monotonic millisecond timestamp from the same clock as
    /// the pointer stream. The elapsed time since the previous tick is
    /// clamped to `[0, max_frame_delta]` so window suspension or a slow
    /// frame cannot produce a visible jump; the first tick uses dt = 0.
    pub fn tick(&mut self, now: f64) -> f64 {
        let raw_dt = match self.last_tick_time {
            Some(prev) => (now - prev) / 1000.0,
            None => 0.0,
        };
        // The stored tick time only moves forward. A backwards `now`
        // must not rewind it, or the next tick at an already-consumed
        // timestamp would count the same elapsed time twice.
        self.last_tick_time = Some(self.last_tick_time.map_or(now, |prev| now.max(prev)));

        let dt = if raw_dt.is_finite() {
            raw_dt.clamp(0.0, self.config.max_frame_delta)
        } else {
            0.0
        };

        // Reduced motion gates everything autonomous; drag-driven yaw
        // changes already happened in on_pointer_move.
        if self.config.reduced_motion {
            return self.yaw;
        }

        match self.phase {
            Phase::Dragging => {}

            Phase::Inertia => {
                self.yaw += self.angular_velocity * dt;
                self.angular_velocity *= (-self.config.momentum_damping * dt).exp();

                if self.angular_velocity.abs() < self.config.min_velocity_threshold {
                    trace!(target: "core::rotation", "inertia decayed, going passive");
                    self.angular_velocity = 0.0;
                    self.phase = Phase::Passive;
                    self.last_interaction_time = now;
                }
            }

            Phase::Passive => {
                if now - self.last_interaction_time > self.config.auto_resume_delay_ms {
                    self.yaw += dt * self.config.auto_rotate_speed;
                }
            }
        }

        self.yaw
    }

    //--- Query Methods ------------------------------------------------------

    /// Returns the accumulated yaw in radians.
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Returns the signed spin rate in rad/s.
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Returns the current interaction phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while a drag session is active (for cursor
    /// styling or other host feedback).
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn test_config() -> RotationConfig {
        RotationConfig {
            auto_rotate_speed: 0.5,
            drag_sensitivity: 0.01,
            auto_resume_delay_ms: 2000.0,
            max_frame_delta: 0.1,
            momentum_damping: 3.0,
            min_velocity_threshold: 0.05,
            reduced_motion: false,
        }
    }

    fn controller() -> RotationController {
        RotationController::new(test_config()).unwrap()
    }

    fn controller_with(config: RotationConfig) -> RotationController {
        RotationController::new(config).unwrap()
    }

    /// Puts the controller into Inertia with a known velocity by
    /// simulating a flick ending at `release_time`.
    fn flick(ctl: &mut RotationController, release_time: f64) {
        ctl.on_pointer_down(0.0, release_time - 16.0, true);
        ctl.on_pointer_move(100.0, release_time); // 1.0 rad over 16 ms; velocity clamps to the cap
        ctl.on_pointer_up(release_time);
        assert_eq!(ctl.phase(), Phase::Inertia);
    }

    //=====================================================================
    // Construction
    //=====================================================================

    #[test]
    fn starts_passive_with_zero_yaw() {
        let ctl = controller();
        assert_eq!(ctl.phase(), Phase::Passive);
        assert_eq!(ctl.yaw(), 0.0);
        assert_eq!(ctl.angular_velocity(), 0.0);
        assert!(!ctl.is_dragging());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RotationConfig {
            momentum_damping: -1.0,
            ..test_config()
        };
        assert!(RotationController::new(config).is_err());
    }

    #[test]
    fn auto_rotation_active_from_startup() {
        let mut ctl = controller();
        ctl.tick(0.0);
        let yaw = ctl.tick(16.0);
        assert!((yaw - 0.016 * 0.5).abs() < 1e-12, "yaw was {}", yaw);
    }

    //=====================================================================
    // No-op Ticks
    //=====================================================================

    /// Repeated ticks with non-increasing `now` never change yaw or
    /// velocity (dt clamps to 0).
    #[test]
    fn non_increasing_ticks_are_idempotent() {
        let mut ctl = controller();
        flick(&mut ctl, 100.0);

        ctl.tick(100.0);
        let yaw = ctl.yaw();
        let velocity = ctl.angular_velocity();

        for _ in 0..10 {
            ctl.tick(100.0);
            ctl.tick(50.0); // goes backwards, dt clamps to 0
        }

        assert_eq!(ctl.yaw(), yaw);
        assert_eq!(ctl.angular_velocity(), velocity);
    }

    /// A backwards timestamp must not rewind the tick clock: a forward
    /// tick at an already-consumed time would otherwise re-count the
    /// same interval as phantom motion.
    #[test]
    fn backwards_tick_does_not_replay_elapsed_time() {
        let mut ctl = controller();
        ctl.tick(0.0);
        ctl.tick(100.0);
        let yaw = ctl.yaw();

        ctl.tick(50.0);
        ctl.tick(100.0);
        assert_eq!(ctl.yaw(), yaw);

        // Time resumes from the high-water mark, not from the stray sample.
        ctl.tick(116.0);
        assert!((ctl.yaw() - (yaw + 0.016 * 0.5)).abs() < 1e-12, "yaw was {}", ctl.yaw());
    }

    #[test]
    fn first_tick_uses_zero_dt() {
        let mut ctl = controller();
        // Huge first timestamp must not produce a yaw jump.
        let yaw = ctl.tick(1_000_000.0);
        assert_eq!(yaw, 0.0);
    }

    //=====================================================================
    // Drag
    //=====================================================================

    /// The worked example from the interaction contract: a 10 px drag
    /// over 16 ms at sensitivity 0.01 yields exactly 0.1 rad and
    /// 6.25 rad/s.
    #[test]
    fn drag_produces_exact_yaw_delta_and_velocity() {
        let mut ctl = controller();
        assert!(ctl.on_pointer_down(0.0, 0.0, true));
        assert!(ctl.is_dragging());

        ctl.on_pointer_move(10.0, 16.0);

        assert!((ctl.yaw() - 0.1).abs() < 1e-12, "yaw was {}", ctl.yaw());
        assert!(
            (ctl.angular_velocity() - 0.1 / 0.016).abs() < 1e-9,
            "velocity was {}",
            ctl.angular_velocity()
        );
    }

    #[test]
    fn drag_accumulates_across_moves() {
        let mut ctl = controller();
        ctl.on_pointer_down(0.0, 0.0, true);
        ctl.on_pointer_move(10.0, 16.0);
        ctl.on_pointer_move(30.0, 32.0);

        // 30 px total at 0.01 rad/px.
        assert!((ctl.yaw() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn velocity_reflects_only_the_last_sample_pair() {
        let mut ctl = controller();
        ctl.on_pointer_down(0.0, 0.0, true);
        ctl.on_pointer_move(100.0, 16.0); // fast
        ctl.on_pointer_move(101.0, 116.0); // slow finish

        // 1 px over 100 ms: 0.01 rad / 0.1 s = 0.1 rad/s.
        assert!((ctl.angular_velocity() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn move_with_zero_dt_updates_bookkeeping_only() {
        let mut ctl = controller();
        ctl.on_pointer_down(0.0, 10.0, true);
        ctl.on_pointer_move(50.0, 10.0); // same timestamp

        assert_eq!(ctl.yaw(), 0.0);
        assert_eq!(ctl.angular_velocity(), 0.0);

        // Bookkeeping advanced to x=50: the next move is measured from there.
        ctl.on_pointer_move(60.0, 26.0);
        assert!((ctl.yaw() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn move_outside_drag_is_ignored() {
        let mut ctl = controller();
        ctl.on_pointer_move(100.0, 16.0);
        assert_eq!(ctl.yaw(), 0.0);
        assert_eq!(ctl.phase(), Phase::Passive);
    }

    #[test]
    fn tick_during_drag_leaves_yaw_alone() {
        let mut ctl = controller();
        ctl.on_pointer_down(0.0, 0.0, true);
        ctl.on_pointer_move(10.0, 16.0);

        let yaw = ctl.yaw();
        ctl.tick(20.0);
        ctl.tick(36.0);
        assert_eq!(ctl.yaw(), yaw);
    }

    #[test]
    fn flick_velocity_is_clamped() {
        let mut ctl = controller();
        ctl.on_pointer_down(0.0, 0.0, true);
        ctl.on_pointer_move(1.0e9, 0.001); // absurd sample pair

        assert!(ctl.angular_velocity() <= MAX_ANGULAR_VELOCITY);
        assert!(ctl.angular_velocity().is_finite());
    }

    #[test]
    fn nan_position_does_not_corrupt_yaw() {
        let mut ctl = controller();
        ctl.on_pointer_down(0.0, 0.0, true);
        ctl.on_pointer_move(f64::NAN, 16.0);

        assert!(ctl.yaw().is_finite());
        assert!(ctl.angular_velocity().is_finite());
    }

    //=====================================================================
    // Hit-miss
    //=====================================================================

    /// A pointer-down that missed the shape starts nothing; subsequent
    /// move/up are no-ops.
    #[test]
    fn hit_miss_produces_no_state_change() {
        let mut ctl = controller();
        assert!(!ctl.on_pointer_down(0.0, 0.0, false));
        assert_eq!(ctl.phase(), Phase::Passive);

        ctl.on_pointer_move(50.0, 16.0);
        ctl.on_pointer_up(32.0);

        assert_eq!(ctl.yaw(), 0.0);
        assert_eq!(ctl.angular_velocity(), 0.0);
        assert_eq!(ctl.phase(), Phase::Passive);
        // A miss must not reset the idle timer either.
        assert_eq!(ctl.last_interaction_time, f64::NEG_INFINITY);
    }

    //=====================================================================
    // Release & Inertia
    //=====================================================================

    #[test]
    fn fast_release_enters_inertia_with_velocity_unchanged() {
        let mut ctl = controller();
        ctl.on_pointer_down(0.0, 0.0, true);
        ctl.on_pointer_move(10.0, 16.0);
        let velocity = ctl.angular_velocity();

        ctl.on_pointer_up(16.0);

        assert_eq!(ctl.phase(), Phase::Inertia);
        assert_eq!(ctl.angular_velocity(), velocity);
    }

    #[test]
    fn slow_release_goes_passive_with_zero_velocity() {
        let mut ctl = controller();
        ctl.on_pointer_down(0.0, 0.0, true);
        ctl.on_pointer_move(0.01, 16.0); // well below threshold

        ctl.on_pointer_up(16.0);

        assert_eq!(ctl.phase(), Phase::Passive);
        assert_eq!(ctl.angular_velocity(), 0.0);
    }

    #[test]
    fn release_outside_drag_is_ignored() {
        let mut ctl = controller();
        ctl.on_pointer_up(100.0);
        assert_eq!(ctl.phase(), Phase::Passive);
    }

    /// Splitting the same elapsed time into different tick granularities
    /// yields the same final velocity: decay is exponential in total
    /// time, not per-frame.
    #[test]
    fn inertia_decay_is_frame_rate_independent() {
        let total_s = 0.5;
        let damping = test_config().momentum_damping;

        let run = |steps: usize| -> (f64, f64) {
            let mut ctl = controller();
            flick(&mut ctl, 0.0);
            let v0 = ctl.angular_velocity();

            ctl.tick(0.0);
            let step_ms = total_s * 1000.0 / steps as f64;
            for i in 1..=steps {
                ctl.tick(i as f64 * step_ms);
            }
            (v0, ctl.angular_velocity())
        };

        let (v0, coarse) = run(10);
        let (_, fine) = run(500);
        let expected = v0 * (-damping * total_s).exp();

        assert!((coarse - expected).abs() < 1e-9, "coarse: {}", coarse);
        assert!((fine - expected).abs() < 1e-9, "fine: {}", fine);
    }

    #[test]
    fn inertia_advances_yaw_each_tick() {
        let mut ctl = controller();
        flick(&mut ctl, 0.0);
        let yaw_at_release = ctl.yaw();

        ctl.tick(0.0);
        ctl.tick(16.0);

        assert!(ctl.yaw() > yaw_at_release);
    }

    /// Once velocity drops below threshold it is zeroed exactly, the
    /// phase becomes Passive, and yaw stays put until the resume delay
    /// elapses.
    #[test]
    fn inertia_terminates_below_threshold() {
        let mut ctl = controller();
        flick(&mut ctl, 0.0);

        // Damping 3.0 /s decays the clamped 10π rad/s below 0.05 within ~2.2 s.
        ctl.tick(0.0);
        let mut now = 0.0;
        while ctl.phase() == Phase::Inertia {
            now += 16.0;
            ctl.tick(now);
            assert!(now < 10_000.0, "inertia never terminated");
        }

        assert_eq!(ctl.phase(), Phase::Passive);
        assert_eq!(ctl.angular_velocity(), 0.0);

        // Still inside the cooling-off period: yaw frozen.
        let yaw = ctl.yaw();
        ctl.tick(now + 16.0);
        assert_eq!(ctl.yaw(), yaw);
    }

    //=====================================================================
    // Auto-resume Gating
    //=====================================================================

    #[test]
    fn auto_resume_respects_the_delay() {
        let mut ctl = controller();

        // End an interaction at t0 = 1000 ms.
        ctl.on_pointer_down(0.0, 1000.0, true);
        ctl.on_pointer_up(1000.0);
        assert_eq!(ctl.phase(), Phase::Passive);

        ctl.tick(1000.0);

        // One tick-width before the deadline: no yaw change.
        let yaw = ctl.yaw();
        ctl.tick(1000.0 + 2000.0 - 1.0);
        assert_eq!(ctl.yaw(), yaw);

        // Past the deadline: yaw advances at auto_rotate_speed.
        let before = ctl.yaw();
        ctl.tick(1000.0 + 2000.0 + 1.0);
        let advanced = ctl.yaw() - before;
        assert!((advanced - 0.002 * 0.5).abs() < 1e-12, "advanced {}", advanced);
    }

    #[test]
    fn auto_rotation_rate_matches_config() {
        let mut ctl = controller();
        ctl.tick(0.0);
        // 10 frames at 16 ms.
        for i in 1..=10 {
            ctl.tick(i as f64 * 16.0);
        }
        let expected = 0.16 * 0.5;
        assert!((ctl.yaw() - expected).abs() < 1e-12);
    }

    #[test]
    fn frame_delta_is_clamped_after_a_stall() {
        let mut ctl = controller();
        ctl.tick(0.0);
        // 5 s stall: clamp to max_frame_delta (0.1 s).
        ctl.tick(5000.0);
        assert!((ctl.yaw() - 0.1 * 0.5).abs() < 1e-12);
    }

    //=====================================================================
    // Reduced Motion
    //=====================================================================

    /// A flick under reduced motion never coasts: yaw is frozen after
    /// release no matter how many ticks elapse. Only active dragging
    /// moves the shape.
    #[test]
    fn reduced_motion_suppresses_all_autonomy() {
        let config = RotationConfig {
            reduced_motion: true,
            ..test_config()
        };
        let mut ctl = controller_with(config);

        ctl.on_pointer_down(0.0, 0.0, true);
        ctl.on_pointer_move(100.0, 16.0);
        let yaw_from_drag = ctl.yaw();
        assert!(yaw_from_drag > 0.0);

        ctl.on_pointer_up(16.0);

        let mut now = 16.0;
        for _ in 0..1000 {
            now += 16.0;
            ctl.tick(now);
        }
        assert_eq!(ctl.yaw(), yaw_from_drag);
    }

    #[test]
    fn reduced_motion_suppresses_auto_rotation() {
        let config = RotationConfig {
            reduced_motion: true,
            ..test_config()
        };
        let mut ctl = controller_with(config);

        ctl.tick(0.0);
        for i in 1..=500 {
            ctl.tick(i as f64 * 16.0);
        }
        assert_eq!(ctl.yaw(), 0.0);
    }

    #[test]
    fn reduced_motion_leaves_drag_response_intact() {
        let config = RotationConfig {
            reduced_motion: true,
            ..test_config()
        };
        let mut ctl = controller_with(config);

        ctl.on_pointer_down(0.0, 0.0, true);
        ctl.on_pointer_move(10.0, 16.0);
        assert!((ctl.yaw() - 0.1).abs() < 1e-12);
    }

    //=====================================================================
    // Cancel ≡ Release
    //=====================================================================

    #[test]
    fn cancel_matches_release_exactly() {
        let mut released = controller();
        let mut cancelled = controller();

        for ctl in [&mut released, &mut cancelled] {
            ctl.on_pointer_down(0.0, 0.0, true);
            ctl.on_pointer_move(10.0, 16.0);
        }

        released.on_pointer_up(16.0);
        cancelled.on_pointer_cancel(16.0);

        assert_eq!(released.phase(), cancelled.phase());
        assert_eq!(released.angular_velocity(), cancelled.angular_velocity());
        assert_eq!(released.yaw(), cancelled.yaw());
    }

    #[test]
    fn cancel_of_slow_drag_goes_passive() {
        let mut ctl = controller();
        ctl.on_pointer_down(0.0, 0.0, true);
        ctl.on_pointer_cancel(16.0);

        assert_eq!(ctl.phase(), Phase::Passive);
        assert_eq!(ctl.angular_velocity(), 0.0);
    }

    //=====================================================================
    // Yaw Continuity
    //=====================================================================

    /// No transition introduces a discontinuity in yaw itself, only in
    /// its derivative: walk a full gesture and check yaw never jumps by
    /// more than one frame's worth of motion.
    #[test]
    fn yaw_is_continuous_across_transitions() {
        let mut ctl = controller();
        let mut prev_yaw = ctl.yaw();
        let mut now = 0.0;

        let max_step = test_config().max_frame_delta * MAX_ANGULAR_VELOCITY;

        let check = |ctl: &RotationController, prev: &mut f64| {
            assert!((ctl.yaw() - *prev).abs() <= max_step + 1e-9);
            *prev = ctl.yaw();
        };

        ctl.tick(now);
        check(&ctl, &mut prev_yaw);

        ctl.on_pointer_down(0.0, now, true);
        check(&ctl, &mut prev_yaw);

        for i in 1..=5 {
            now = i as f64 * 16.0;
            ctl.on_pointer_move(i as f64 * 10.0, now);
            check(&ctl, &mut prev_yaw);
            ctl.tick(now);
            check(&ctl, &mut prev_yaw);
        }

        ctl.on_pointer_up(now);
        check(&ctl, &mut prev_yaw);

        for _ in 0..400 {
            now += 16.0;
            ctl.tick(now);
            check(&ctl, &mut prev_yaw);
        }
    }
}
