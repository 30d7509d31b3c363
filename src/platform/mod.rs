//! Platform abstraction layer
//!
//! The kernel never talks to a device. It pulls samples through
//! [`AccelerationSource`], and [`SensorSubscription`] scopes the device
//! updates so they are always switched off when the owner goes away.

pub mod sources;

pub use sources::{NoSensor, NoisyTilt, ScriptedSource};

use crate::sim::MotionSample;

/// Anything that can report the current device acceleration
pub trait AccelerationSource {
    /// Latest reading, or `None` if there is no data this frame
    fn sample(&mut self) -> Option<MotionSample>;

    /// Whether the device has an accelerometer at all
    fn is_available(&self) -> bool {
        true
    }

    /// Begin delivering updates
    fn start(&mut self) {}

    /// Stop delivering updates
    fn stop(&mut self) {}
}

impl<S: AccelerationSource + ?Sized> AccelerationSource for &mut S {
    fn sample(&mut self) -> Option<MotionSample> {
        (**self).sample()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn start(&mut self) {
        (**self).start()
    }

    fn stop(&mut self) {
        (**self).stop()
    }
}

/// Active accelerometer subscription.
///
/// Starts the source on creation (if available) and stops it on drop.
pub struct SensorSubscription<S: AccelerationSource> {
    source: S,
    active: bool,
}

impl<S: AccelerationSource> SensorSubscription<S> {
    pub fn new(mut source: S) -> Self {
        let active = source.is_available();
        if active {
            source.start();
            log::info!("Accelerometer updates on");
        } else {
            log::warn!("No accelerometer available, motion input disabled");
        }
        Self { source, active }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: AccelerationSource> AccelerationSource for SensorSubscription<S> {
    fn sample(&mut self) -> Option<MotionSample> {
        if self.active {
            self.source.sample()
        } else {
            None
        }
    }

    fn is_available(&self) -> bool {
        self.active
    }
}

impl<S: AccelerationSource> Drop for SensorSubscription<S> {
    fn drop(&mut self) {
        if self.active {
            self.source.stop();
            self.active = false;
            log::info!("Accelerometer updates off");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts start/stop calls through shared cells
    struct CountingSource {
        available: bool,
        starts: Rc<Cell<u32>>,
        stops: Rc<Cell<u32>>,
    }

    impl AccelerationSource for CountingSource {
        fn sample(&mut self) -> Option<MotionSample> {
            Some(MotionSample::planar(0.1, 0.2))
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn start(&mut self) {
            self.starts.set(self.starts.get() + 1);
        }

        fn stop(&mut self) {
            self.stops.set(self.stops.get() + 1);
        }
    }

    fn counting_source(available: bool) -> (CountingSource, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let starts = Rc::new(Cell::new(0));
        let stops = Rc::new(Cell::new(0));
        let source = CountingSource {
            available,
            starts: starts.clone(),
            stops: stops.clone(),
        };
        (source, starts, stops)
    }

    #[test]
    fn test_subscription_starts_and_stops_once() {
        let (source, starts, stops) = counting_source(true);
        {
            let mut sub = SensorSubscription::new(source);
            assert!(sub.is_active());
            assert_eq!(starts.get(), 1);
            assert_eq!(stops.get(), 0);
            assert_eq!(sub.sample(), Some(MotionSample::planar(0.1, 0.2)));
        }
        assert_eq!(starts.get(), 1);
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn test_unavailable_sensor_never_started() {
        let (source, starts, stops) = counting_source(false);
        {
            let mut sub = SensorSubscription::new(source);
            assert!(!sub.is_active());
            assert_eq!(sub.sample(), None);
        }
        assert_eq!(starts.get(), 0);
        assert_eq!(stops.get(), 0);
    }

    #[test]
    fn test_borrowed_source_is_released() {
        let (mut source, _starts, stops) = counting_source(true);
        {
            let mut sub = SensorSubscription::new(&mut source);
            assert!(sub.sample().is_some());
        }
        assert_eq!(stops.get(), 1);
        // The source itself is still usable by its owner
        assert!(source.sample().is_some());
    }
}
