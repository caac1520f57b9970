use super::InvalidSetting;

pub const DEFAULT_TARGET_GLASSES: u32 = 8;

/// Manual glasses-of-water counter. No timer; only explicit commands
/// mutate it, and going past the target is allowed.
#[derive(Debug, Clone)]
pub struct WaterCounter {
    glasses: u32,
    target: u32,
}

impl Default for WaterCounter {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_GLASSES).expect("default target is positive")
    }
}

impl WaterCounter {
    pub fn new(target: u32) -> Result<Self, InvalidSetting> {
        if target == 0 {
            return Err(InvalidSetting::new("daily glass target"));
        }
        Ok(Self { glasses: 0, target })
    }

    pub fn add_glass(&mut self) -> u32 {
        self.glasses += 1;
        self.glasses
    }

    pub fn set_target(&mut self, target: u32) -> Result<(), InvalidSetting> {
        if target == 0 {
            return Err(InvalidSetting::new("daily glass target"));
        }
        self.target = target;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.glasses = 0;
    }

    pub fn glasses(&self) -> u32 {
        self.glasses
    }

    pub fn target(&self) -> u32 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_glasses_from_zero() {
        let mut counter = WaterCounter::default();

        for _ in 0..5 {
            counter.add_glass();
        }

        assert_eq!(counter.glasses(), 5);
    }

    #[test]
    fn counting_past_the_target_is_allowed() {
        let mut counter = WaterCounter::new(2).unwrap();

        for _ in 0..4 {
            counter.add_glass();
        }

        assert_eq!(counter.glasses(), 4);
        assert_eq!(counter.target(), 2);
    }

    #[test]
    fn reset_zeroes_any_prior_count() {
        let mut counter = WaterCounter::default();
        counter.add_glass();
        counter.add_glass();

        counter.reset();

        assert_eq!(counter.glasses(), 0);
    }

    #[test]
    fn zero_target_is_rejected() {
        assert!(WaterCounter::new(0).is_err());

        let mut counter = WaterCounter::default();
        assert!(counter.set_target(0).is_err());
        assert_eq!(counter.target(), 8);
    }
}
