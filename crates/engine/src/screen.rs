/// Standard fade duration in update ticks.
pub const FADE_TICKS: u32 = 24;
/// Slow fade used by end-of-run presentation.
pub const SLOW_FADE_TICKS: u32 = 48;

/// Tick-driven screen brightness. 1.0 is fully visible, 0.0 is black.
/// All waiting is expressed as state re-evaluated once per `update` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFade {
    brightness: f32,
    target: f32,
    step: f32,
    remaining_ticks: u32,
}

impl Default for ScreenFade {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            target: 1.0,
            step: 0.0,
            remaining_ticks: 0,
        }
    }
}

impl ScreenFade {
    pub fn start_fade_out(&mut self, ticks: u32) {
        self.start_fade_to(0.0, ticks);
    }

    pub fn start_fade_in(&mut self, ticks: u32) {
        self.start_fade_to(1.0, ticks);
    }

    /// Immediately blacks out the screen, cancelling any running fade.
    pub fn cut_to_black(&mut self) {
        self.start_fade_to(0.0, 0);
    }

    fn start_fade_to(&mut self, target: f32, ticks: u32) {
        self.target = target;
        if ticks == 0 {
            self.brightness = target;
            self.step = 0.0;
            self.remaining_ticks = 0;
            return;
        }
        self.step = (target - self.brightness) / ticks as f32;
        self.remaining_ticks = ticks;
    }

    pub fn update(&mut self) {
        if self.remaining_ticks == 0 {
            return;
        }
        self.remaining_ticks -= 1;
        if self.remaining_ticks == 0 {
            self.brightness = self.target;
        } else {
            self.brightness = (self.brightness + self.step).clamp(0.0, 1.0);
        }
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn is_fading(&self) -> bool {
        self.remaining_ticks > 0
    }

    pub fn is_black(&self) -> bool {
        !self.is_fading() && self.brightness <= f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_screen_is_fully_visible() {
        let screen = ScreenFade::default();
        assert_eq!(screen.brightness(), 1.0);
        assert!(!screen.is_fading());
        assert!(!screen.is_black());
    }

    #[test]
    fn fade_out_reaches_black_after_exactly_n_ticks() {
        let mut screen = ScreenFade::default();
        screen.start_fade_out(2);
        assert!(screen.is_fading());

        screen.update();
        assert!(screen.is_fading());
        assert!(!screen.is_black());

        screen.update();
        assert!(!screen.is_fading());
        assert!(screen.is_black());
    }

    #[test]
    fn fade_in_from_black_restores_full_brightness() {
        let mut screen = ScreenFade::default();
        screen.cut_to_black();
        assert!(screen.is_black());

        screen.start_fade_in(4);
        for _ in 0..4 {
            screen.update();
        }
        assert_eq!(screen.brightness(), 1.0);
        assert!(!screen.is_fading());
    }

    #[test]
    fn cut_to_black_cancels_running_fade() {
        let mut screen = ScreenFade::default();
        screen.start_fade_out(30);
        screen.update();
        screen.cut_to_black();
        assert!(screen.is_black());
        screen.update();
        assert!(screen.is_black());
    }

    #[test]
    fn updates_after_completion_hold_the_target() {
        let mut screen = ScreenFade::default();
        screen.start_fade_out(2);
        for _ in 0..10 {
            screen.update();
        }
        assert!(screen.is_black());
    }
}
