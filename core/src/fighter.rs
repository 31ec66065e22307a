use serde::{Deserialize, Serialize};

use crate::animation::{Animator, CycleEnd};
use crate::config::{Arena, FighterSpec, SpawnPoint, SpriteSheet, Tuning};
use crate::constants::*;
use crate::physics::*;
use crate::timer::DelayedAction;
use crate::types::*;

/// One combatant: physics body, action state machine, animation and the two
/// delayed hitbox timers.
///
/// A fighter lives for exactly one round. Death is terminal; the orchestrator
/// builds a fresh instance for the next round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    player: PlayerId,
    body: Body,
    facing: Facing,
    running: bool,
    attacking: bool,
    attack_type: Option<AttackKind>,
    attack_cooldown: u32,
    health: i32,
    alive: bool,
    hit: bool,
    target: Option<PlayerId>,
    attack1_timer: DelayedAction<AttackKind>,
    attack2_timer: DelayedAction<AttackKind>,
    animation: Animator,
    /// Frame chosen for display this tick, before the animation advanced.
    shown: (Action, usize),
    frames: FrameCounts,
    sprite: SpriteSheet,
    cue: Cue,
    tuning: Tuning,
}

impl Fighter {
    /// Create a fighter at the character's spawn point.
    pub fn spawn(player: PlayerId, spec: &FighterSpec, tuning: &Tuning, now_ms: u64) -> Self {
        let SpawnPoint { x, y, facing } = spec.spawn;
        Self::new(player, x, y, facing, spec, tuning, now_ms)
    }

    pub fn new(
        player: PlayerId,
        x: i32,
        y: i32,
        facing: Facing,
        spec: &FighterSpec,
        tuning: &Tuning,
        now_ms: u64,
    ) -> Self {
        let timer = |kind| DelayedAction::new(tuning.impact_ms(player, kind), kind);
        Fighter {
            player,
            body: Body {
                rect: Rect::new(x, y, BODY_WIDTH, BODY_HEIGHT),
                vel_y: 0,
                airborne: false,
            },
            facing,
            running: false,
            attacking: false,
            attack_type: None,
            attack_cooldown: 0,
            health: MAX_HEALTH,
            alive: true,
            hit: false,
            target: None,
            attack1_timer: timer(AttackKind::Attack1),
            attack2_timer: timer(AttackKind::Attack2),
            animation: Animator::new(now_ms),
            shown: (Action::Idle, 0),
            frames: spec.frames,
            sprite: spec.sprite,
            cue: spec.cue,
            tuning: *tuning,
        }
    }

    // ── Per-tick operations ─────────────────────────────────

    /// Physics, controls, cooldown and hitbox timers for one tick.
    ///
    /// `opponent` is the other fighter as it was at the start of the tick.
    /// Returns the strikes that connected; the caller applies them to the
    /// opponent once both fighters have moved.
    pub fn move_fighter(
        &mut self,
        arena: &Arena,
        opponent: &FighterView,
        input: PlayerInput,
        round_over: bool,
        now_ms: u64,
        audio: &mut dyn AudioSink,
    ) -> Vec<Strike> {
        let tuning = self.tuning;
        let mut dx = 0;
        self.running = false;

        if self.alive && !self.attacking && !round_over {
            if input.pressed(button::LEFT) {
                dx = -tuning.run_speed;
                self.running = true;
            }
            if input.pressed(button::RIGHT) {
                dx = tuning.run_speed;
                self.running = true;
            }
            if input.pressed(button::JUMP) {
                self.body = apply_jump(&self.body, &tuning);
            }
            if input.pressed(button::ATTACK1) {
                self.attack(AttackKind::Attack1, opponent, now_ms);
            }
            if input.pressed(button::ATTACK2) {
                self.attack(AttackKind::Attack2, opponent, now_ms);
            }
        }

        self.body = apply_gravity(&self.body, &tuning);
        let motion = clamp_motion(&self.body, dx, arena, &tuning);

        self.facing = facing_towards(&self.body.rect, &opponent.rect);

        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
        }

        // Hitboxes resolve against the pre-move position.
        let fired = [
            self.attack1_timer.tick(now_ms),
            self.attack2_timer.tick(now_ms),
        ];
        let mut strikes = Vec::new();
        for kind in fired.into_iter().flatten() {
            if let Some(strike) = self.resolve_hitbox(kind, opponent, audio) {
                strikes.push(strike);
            }
        }

        self.body = integrate(&self.body, &motion);
        strikes
    }

    /// Pick this tick's action by priority and advance its animation.
    pub fn update(&mut self, now_ms: u64) {
        self.select_action(now_ms);
        self.shown = (self.animation.action(), self.animation.frame_index());

        let end = self.animation.advance(
            now_ms,
            self.tuning.animation_frame_ms,
            &self.frames,
            self.alive,
        );
        if let Some(CycleEnd::Completed(action)) = end {
            self.finish_cycle(action, now_ms);
        }
    }

    // ── Combat ──────────────────────────────────────────────

    /// Declare an attack against `opponent`. Damage lands later, when the
    /// attack's impact timer fires. Ignored while cooling down. The last
    /// accepted kind picks the animation; earlier timers stay armed.
    pub fn attack(&mut self, kind: AttackKind, opponent: &FighterView, now_ms: u64) -> bool {
        if self.attack_cooldown > 0 {
            return false;
        }
        self.attacking = true;
        self.attack_type = Some(kind);
        self.target = Some(opponent.player);
        let timer = match kind {
            AttackKind::Attack1 => &mut self.attack1_timer,
            AttackKind::Attack2 => &mut self.attack2_timer,
        };
        timer.activate(now_ms);
        log::debug!(
            "{} declares attack {} at {}ms, impact in {}ms",
            self.player,
            kind.number(),
            now_ms,
            timer.duration_ms()
        );
        true
    }

    /// Impact-frame callback: sound the cue and test the attack volume
    /// against the bound target.
    pub fn resolve_hitbox(
        &self,
        kind: AttackKind,
        target: &FighterView,
        audio: &mut dyn AudioSink,
    ) -> Option<Strike> {
        audio.play(self.cue);
        if self.target != Some(target.player) {
            return None;
        }

        let hitbox = hitbox(&self.body.rect, self.facing, HITBOX_REACH);
        if !hitbox.overlaps(&target.rect) {
            log::debug!("{} attack {} whiffs", self.player, kind.number());
            return None;
        }

        log::debug!(
            "{} attack {} lands on {}",
            self.player,
            kind.number(),
            target.player
        );
        Some(Strike {
            attacker: self.player,
            target: target.player,
            kind,
            damage: self.tuning.attack_damage,
            hitbox,
        })
    }

    pub fn receive_strike(&mut self, strike: &Strike) {
        debug_assert_eq!(strike.target, self.player);
        self.apply_damage(strike.damage);
    }

    /// Lose `amount` health, clamped at zero, and enter hit-stun.
    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).clamp(0, MAX_HEALTH);
        self.hit = true;
        if self.alive && self.health == 0 {
            log::debug!("{} is down", self.player);
        }
        self.alive = self.alive && self.health > 0;
    }

    // ── State machine internals ─────────────────────────────

    fn select_action(&mut self, now_ms: u64) {
        let next = if self.health <= 0 {
            self.health = 0;
            self.alive = false;
            Action::Death
        } else if self.hit {
            Action::Hit
        } else if self.attacking {
            self.attack_type
                .map_or(self.animation.action(), AttackKind::action)
        } else if self.body.airborne {
            Action::Jump
        } else if self.running {
            Action::Run
        } else {
            Action::Idle
        };
        self.animation.enter(next, now_ms);
    }

    /// A full attack or hit-stun cycle ends the lockout and starts recovery.
    fn finish_cycle(&mut self, action: Action, now_ms: u64) {
        match action {
            Action::Attack1 | Action::Attack2 => {}
            Action::Hit => self.hit = false,
            _ => return,
        }
        self.attacking = false;
        self.attack_type = None;
        self.attack_cooldown = self.tuning.attack_recovery_ticks;
        self.select_action(now_ms);
    }

    // ── Read-only outputs ───────────────────────────────────

    pub fn view(&self) -> FighterView {
        FighterView {
            player: self.player,
            rect: self.body.rect,
            health: self.health,
            alive: self.alive,
        }
    }

    pub fn sprite_frame(&self) -> SpriteFrame {
        let (action, frame_index) = self.shown;
        let SpriteSheet {
            frame_size,
            scale,
            offset,
        } = self.sprite;
        SpriteFrame {
            player: self.player,
            action,
            frame_index,
            source: Rect::new(
                frame_index as i32 * frame_size,
                action.sheet_row() * frame_size,
                frame_size,
                frame_size,
            ),
            draw_x: self.body.rect.x - offset[0] * scale,
            draw_y: self.body.rect.y - offset[1] * scale,
            scale,
            flipped: self.facing.is_flipped(),
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    pub fn vel_y(&self) -> i32 {
        self.body.vel_y
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn action(&self) -> Action {
        self.animation.action()
    }

    pub fn frame_index(&self) -> usize {
        self.animation.frame_index()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len(self.animation.action())
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_airborne(&self) -> bool {
        self.body.airborne
    }

    pub fn attack_type(&self) -> Option<AttackKind> {
        self.attack_type
    }

    pub fn attack_cooldown(&self) -> u32 {
        self.attack_cooldown
    }

    pub fn target(&self) -> Option<PlayerId> {
        self.target
    }

    pub fn timer(&self, kind: AttackKind) -> &DelayedAction<AttackKind> {
        match kind {
            AttackKind::Attack1 => &self.attack1_timer,
            AttackKind::Attack2 => &self.attack2_timer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{warrior, wizard};

    #[derive(Default)]
    struct CueLog(Vec<Cue>);

    impl AudioSink for CueLog {
        fn play(&mut self, cue: Cue) {
            self.0.push(cue);
        }
    }

    fn ms(tick: u64) -> u64 {
        tick * 1000 / TICK_RATE as u64
    }

    fn pair(x1: i32, x2: i32) -> (Fighter, Fighter) {
        let tuning = Tuning::default();
        let a = Fighter::new(PlayerId::One, x1, SPAWN_Y, Facing::Right, &warrior(), &tuning, 0);
        let b = Fighter::new(PlayerId::Two, x2, SPAWN_Y, Facing::Left, &wizard(), &tuning, 0);
        (a, b)
    }

    /// One full tick for `a` with `b` standing still.
    fn tick(
        a: &mut Fighter,
        b: &Fighter,
        input: PlayerInput,
        now: u64,
        audio: &mut CueLog,
    ) -> Vec<Strike> {
        let strikes = a.move_fighter(&Arena::default(), &b.view(), input, false, now, audio);
        a.update(now);
        strikes
    }

    fn assert_invariants(f: &Fighter) {
        assert!((0..=MAX_HEALTH).contains(&f.health()));
        assert_eq!(f.is_alive(), f.health() > 0);
        assert!(f.frame_index() < f.frame_count());
        if f.action().is_attack() {
            assert!(f.is_attacking());
        }
    }

    #[test]
    fn spawn_uses_spec_position() {
        let f = Fighter::spawn(PlayerId::Two, &wizard(), &Tuning::default(), 0);
        assert_eq!(f.rect(), Rect::new(PLAYER_TWO_SPAWN_X, SPAWN_Y, BODY_WIDTH, BODY_HEIGHT));
        assert_eq!(f.facing(), Facing::Left);
        assert_eq!(f.health(), MAX_HEALTH);
        assert_eq!(f.action(), Action::Idle);
    }

    #[test]
    fn impact_fires_at_delay_and_damages_overlapping_target() {
        let (mut a, mut b) = pair(200, 300);
        let mut audio = CueLog::default();
        assert!(a.attack(AttackKind::Attack1, &b.view(), 0));

        let mut landed = None;
        for t in 0..120 {
            let now = ms(t);
            let strikes = tick(&mut a, &b, NULL_INPUT, now, &mut audio);
            if !strikes.is_empty() {
                assert!(now >= 500, "resolved early at {now}ms");
                landed = Some((now, strikes));
                break;
            }
        }
        let (now, strikes) = landed.expect("attack never resolved");
        assert_eq!(now, 500);
        assert_eq!(strikes.len(), 1);
        assert_eq!(audio.0, vec![Cue::Sword]);

        b.receive_strike(&strikes[0]);
        assert_eq!(b.health(), MAX_HEALTH - ATTACK_DAMAGE);
        assert!(b.is_hit());
        assert!(b.is_alive());
    }

    #[test]
    fn whiff_still_sounds_cue() {
        let (mut a, b) = pair(0, 800);
        let mut audio = CueLog::default();
        a.attack(AttackKind::Attack2, &b.view(), 0);
        let mut strikes = Vec::new();
        for t in 0..60 {
            strikes.extend(tick(&mut a, &b, NULL_INPUT, ms(t), &mut audio));
        }
        assert!(strikes.is_empty());
        assert_eq!(audio.0, vec![Cue::Sword]);
        assert_eq!(b.health(), MAX_HEALTH);
    }

    #[test]
    fn hitbox_follows_facing() {
        // Target stands to the left; facing flips and the volume extends left.
        let (mut a, b) = pair(400, 300);
        let mut audio = CueLog::default();
        a.attack(AttackKind::Attack2, &b.view(), 0);
        let mut strikes = Vec::new();
        for t in 0..60 {
            strikes.extend(tick(&mut a, &b, NULL_INPUT, ms(t), &mut audio));
        }
        assert_eq!(a.facing(), Facing::Left);
        assert_eq!(strikes.len(), 1);
        assert_eq!(strikes[0].hitbox, Rect::new(280, SPAWN_Y, 160, BODY_HEIGHT));
    }

    #[test]
    fn both_attack_buttons_arm_both_timers() {
        let (mut a, b) = pair(200, 300);
        let mut audio = CueLog::default();
        let both = PlayerInput::new(button::ATTACK1 | button::ATTACK2);
        tick(&mut a, &b, both, 0, &mut audio);
        assert!(a.timer(AttackKind::Attack1).is_active());
        assert!(a.timer(AttackKind::Attack2).is_active());
        assert_eq!(a.attack_type(), Some(AttackKind::Attack2));
        assert_eq!(a.action(), Action::Attack2);

        let mut strikes = Vec::new();
        for t in 1..=60 {
            strikes.extend(tick(&mut a, &b, NULL_INPUT, ms(t), &mut audio));
        }
        let kinds: Vec<_> = strikes.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![AttackKind::Attack2, AttackKind::Attack1]);
        assert_eq!(audio.0, vec![Cue::Sword, Cue::Sword]);
    }

    #[test]
    fn held_buttons_ignored_mid_attack() {
        let (mut a, b) = pair(200, 300);
        let mut audio = CueLog::default();
        tick(&mut a, &b, PlayerInput::new(button::ATTACK1), 0, &mut audio);
        tick(&mut a, &b, PlayerInput::new(button::ATTACK2), ms(1), &mut audio);
        assert_eq!(a.attack_type(), Some(AttackKind::Attack1));
        assert!(!a.timer(AttackKind::Attack2).is_active());
    }

    #[test]
    fn direct_attack_mid_attack_switches_kind() {
        let (mut a, b) = pair(200, 300);
        assert!(a.attack(AttackKind::Attack1, &b.view(), 0));
        assert!(a.attack(AttackKind::Attack2, &b.view(), 16));
        assert_eq!(a.attack_type(), Some(AttackKind::Attack2));
        assert_eq!(a.timer(AttackKind::Attack1).armed_at(), Some(0));
        assert_eq!(a.timer(AttackKind::Attack2).armed_at(), Some(16));
    }

    #[test]
    fn attack_rejected_during_cooldown() {
        let (mut a, b) = pair(0, 800);
        let mut audio = CueLog::default();
        assert!(a.attack(AttackKind::Attack1, &b.view(), 0));

        let mut t = 0;
        while a.is_attacking() {
            tick(&mut a, &b, NULL_INPUT, ms(t), &mut audio);
            assert_invariants(&a);
            t += 1;
            assert!(t < 200, "attack never finished");
        }
        assert_eq!(a.attack_cooldown(), ATTACK_RECOVERY_TICKS);
        assert_eq!(a.action(), Action::Idle);

        let mut accepted = 0;
        while a.attack_cooldown() > 0 {
            for _ in 0..5 {
                if a.attack(AttackKind::Attack2, &b.view(), ms(t)) {
                    accepted += 1;
                }
            }
            tick(&mut a, &b, NULL_INPUT, ms(t), &mut audio);
            t += 1;
        }
        assert_eq!(accepted, 0);
        assert!(a.attack(AttackKind::Attack2, &b.view(), ms(t)));
    }

    #[test]
    fn attack_animation_runs_to_completion() {
        let (mut a, b) = pair(0, 800);
        let mut audio = CueLog::default();
        let attack = PlayerInput::new(button::ATTACK2);
        tick(&mut a, &b, attack, 0, &mut audio);
        assert_eq!(a.action(), Action::Attack2);

        // Held buttons are ignored until the attack ends.
        let mut seen = vec![a.frame_index()];
        let mut t = 1;
        while a.is_attacking() {
            tick(&mut a, &b, PlayerInput::new(button::RIGHT | button::ATTACK1), ms(t), &mut audio);
            assert_invariants(&a);
            if a.is_attacking() {
                assert_eq!(a.action(), Action::Attack2);
                assert_eq!(a.rect().x, 0);
                seen.push(a.frame_index());
            }
            t += 1;
        }
        seen.dedup();
        assert_eq!(seen, (0..WARRIOR_FRAMES.attack2).collect::<Vec<_>>());
    }

    #[test]
    fn hit_stun_interrupts_attack() {
        let (mut a, b) = pair(0, 800);
        let mut audio = CueLog::default();
        a.attack(AttackKind::Attack1, &b.view(), 0);
        tick(&mut a, &b, NULL_INPUT, 0, &mut audio);
        a.apply_damage(ATTACK_DAMAGE);
        tick(&mut a, &b, NULL_INPUT, ms(1), &mut audio);
        assert_eq!(a.action(), Action::Hit);
        assert!(a.is_attacking());

        let mut t = 2;
        while a.is_hit() {
            tick(&mut a, &b, NULL_INPUT, ms(t), &mut audio);
            assert_invariants(&a);
            t += 1;
            assert!(t < 100);
        }
        assert!(!a.is_attacking());
        assert_eq!(a.attack_type(), None);
        assert_eq!(a.attack_cooldown(), ATTACK_RECOVERY_TICKS);
        assert_eq!(a.action(), Action::Idle);
    }

    #[test]
    fn lethal_hit_clamps_and_forces_death() {
        let (a, mut b) = pair(200, 300);
        let mut audio = CueLog::default();
        b.apply_damage(MAX_HEALTH - 5);
        assert_eq!(b.health(), 5);
        assert!(b.attack(AttackKind::Attack1, &a.view(), 0));

        b.apply_damage(ATTACK_DAMAGE);
        assert_eq!(b.health(), 0);
        assert!(!b.is_alive());
        assert!(b.is_hit());
        assert!(b.is_attacking());

        tick(&mut b, &a, PlayerInput::new(button::JUMP), 16, &mut audio);
        assert_eq!(b.action(), Action::Death);
        assert!(!b.is_airborne());

        for t in 2..300 {
            tick(&mut b, &a, PlayerInput::new(button::LEFT), ms(t), &mut audio);
            assert_invariants(&b);
            assert_eq!(b.action(), Action::Death);
            assert!(!b.is_alive());
        }
        assert_eq!(b.frame_index(), WIZARD_FRAMES.death - 1);
        assert_eq!(b.rect().x, 300);
    }

    #[test]
    fn health_never_negative() {
        let (mut a, _) = pair(0, 800);
        for _ in 0..30 {
            a.apply_damage(ATTACK_DAMAGE);
            assert!(a.health() >= 0);
        }
        a.apply_damage(-50);
        assert_eq!(a.health(), 0);
        assert!(!a.is_alive());
    }

    #[test]
    fn left_wall_clamps_running() {
        let (mut a, b) = pair(0, 800);
        let mut audio = CueLog::default();
        tick(&mut a, &b, PlayerInput::new(button::LEFT), 0, &mut audio);
        assert_eq!(a.rect().x, 0);
        assert!(a.is_running());
        assert_eq!(a.action(), Action::Run);
    }

    #[test]
    fn right_beats_left_when_both_held() {
        let (mut a, b) = pair(100, 800);
        let mut audio = CueLog::default();
        tick(&mut a, &b, PlayerInput::new(button::LEFT | button::RIGHT), 0, &mut audio);
        assert_eq!(a.rect().x, 100 + RUN_SPEED);
    }

    #[test]
    fn jump_arcs_and_lands() {
        let (mut a, b) = pair(100, 800);
        let mut audio = CueLog::default();
        let ground = a.rect().bottom();
        tick(&mut a, &b, PlayerInput::new(button::JUMP), 0, &mut audio);
        assert!(a.is_airborne());
        assert_eq!(a.action(), Action::Jump);
        assert_eq!(a.rect().y, SPAWN_Y + JUMP_VELOCITY + GRAVITY);

        // Holding jump mid-air does not re-launch.
        let vel = a.vel_y();
        tick(&mut a, &b, PlayerInput::new(button::JUMP), ms(1), &mut audio);
        assert_eq!(a.vel_y(), vel + GRAVITY);

        let mut t = 2;
        while a.is_airborne() {
            tick(&mut a, &b, NULL_INPUT, ms(t), &mut audio);
            assert!(a.rect().bottom() <= ground);
            t += 1;
            assert!(t < 100);
        }
        assert_eq!(a.rect().bottom(), ground);
        assert_eq!(a.vel_y(), 0);
        assert_eq!(a.action(), Action::Idle);
    }

    #[test]
    fn round_over_freezes_controls() {
        let (mut a, b) = pair(100, 800);
        let mut audio = CueLog::default();
        let input = PlayerInput::new(button::RIGHT | button::ATTACK1);
        a.move_fighter(&Arena::default(), &b.view(), input, true, 0, &mut audio);
        assert_eq!(a.rect().x, 100);
        assert!(!a.is_attacking());
    }

    #[test]
    fn facing_tracks_opponent() {
        let (mut a, mut b) = pair(100, 300);
        let mut audio = CueLog::default();
        tick(&mut a, &b, NULL_INPUT, 0, &mut audio);
        assert_eq!(a.facing(), Facing::Right);
        b = Fighter::new(
            PlayerId::Two,
            20,
            SPAWN_Y,
            Facing::Left,
            &wizard(),
            &Tuning::default(),
            0,
        );
        tick(&mut a, &b, NULL_INPUT, ms(1), &mut audio);
        assert_eq!(a.facing(), Facing::Left);
        assert!(a.sprite_frame().flipped);
    }

    #[test]
    fn sprite_frame_geometry() {
        let (a, _) = pair(PLAYER_ONE_SPAWN_X, 800);
        let frame = a.sprite_frame();
        assert_eq!(frame.draw_x, PLAYER_ONE_SPAWN_X - WARRIOR_OFFSET[0] * WARRIOR_SCALE);
        assert_eq!(frame.draw_y, SPAWN_Y - WARRIOR_OFFSET[1] * WARRIOR_SCALE);
        assert_eq!(frame.source, Rect::new(0, 0, WARRIOR_SIZE, WARRIOR_SIZE));
        assert!(!frame.flipped);
    }

    #[test]
    fn displayed_frame_lags_animation_advance() {
        let (mut a, b) = pair(100, 800);
        let mut audio = CueLog::default();
        tick(&mut a, &b, NULL_INPUT, 0, &mut audio);
        // 7 ticks is 116ms, past the 100ms frame time.
        for t in 1..=7 {
            tick(&mut a, &b, NULL_INPUT, ms(t), &mut audio);
        }
        assert_eq!(a.frame_index(), 1);
        assert_eq!(a.sprite_frame().frame_index, 0);
        tick(&mut a, &b, NULL_INPUT, ms(8), &mut audio);
        assert_eq!(a.sprite_frame().frame_index, 1);
        assert_eq!(a.sprite_frame().source.x, WARRIOR_SIZE);
    }
}
