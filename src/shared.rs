//! Lock-guarded engine for hosts where the driver callbacks and the control
//! loop run in different contexts (interrupt vs. task, or two threads).
//!
//! Each callback and each poll runs inside a single lock acquisition, so a
//! poll sees either all of an orientation update or none of it.
//!
//! ```
//! use gesture_steer::shared::CriticalSectionEngine;
//! use gesture_steer::{Gesture, SteeringConfig};
//!
//! static ENGINE: CriticalSectionEngine = CriticalSectionEngine::new(SteeringConfig::REFERENCE);
//!
//! ENGINE.on_pose(Gesture::SpreadLike);
//! assert!(ENGINE.poll().longitudinal.is_some());
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex, RawMutex};
use embassy_sync::blocking_mutex::Mutex;

use crate::arm::Arm;
use crate::command::MovementCommand;
use crate::config::SteeringConfig;
use crate::engine::{EngineSnapshot, SteeringEngine};
use crate::gesture::{Gesture, UnlockRequest};
use crate::listener::SensorListener;
use crate::quaternion::Quaternion;

/// Safe to share between interrupts, executors and threads.
pub type CriticalSectionEngine = SharedEngine<CriticalSectionRawMutex>;

/// For a single executor where callbacks and polling never preempt each other.
pub type LocalEngine = SharedEngine<NoopRawMutex>;

pub struct SharedEngine<M: RawMutex> {
    inner: Mutex<M, RefCell<SteeringEngine>>,
}

impl<M: RawMutex> SharedEngine<M> {
    /// This is a const fn, allowing static initialization.
    pub const fn new(config: SteeringConfig) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(SteeringEngine::new(config))),
        }
    }

    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SteeringEngine) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SteeringEngine) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    pub fn poll(&self) -> MovementCommand {
        self.with(SteeringEngine::poll)
    }

    pub fn poll_gated(&self) -> Option<MovementCommand> {
        self.with(SteeringEngine::poll_gated)
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        self.with(SteeringEngine::snapshot)
    }

    pub fn on_orientation(&self, quat: Quaternion) {
        self.with_mut(|e| e.on_orientation(quat))
    }

    pub fn on_pose(&self, gesture: Gesture) -> UnlockRequest {
        self.with_mut(|e| e.on_pose(gesture))
    }

    pub fn on_arm_sync(&self, arm: Arm) {
        self.with_mut(|e| e.on_arm_sync(arm))
    }

    pub fn on_arm_unsync(&self) {
        self.with_mut(SteeringEngine::on_arm_unsync)
    }

    pub fn on_unlock(&self) {
        self.with_mut(SteeringEngine::on_unlock)
    }

    pub fn on_lock(&self) {
        self.with_mut(SteeringEngine::on_lock)
    }

    pub fn on_unpair(&self) {
        self.with_mut(SteeringEngine::on_unpair)
    }
}

impl<M: RawMutex> Default for SharedEngine<M> {
    fn default() -> Self {
        Self::new(SteeringConfig::REFERENCE)
    }
}

/// Lets a driver that only knows [`SensorListener`] feed a shared engine
/// through a plain reference.
impl<M: RawMutex> SensorListener for &SharedEngine<M> {
    fn on_orientation(&mut self, quat: Quaternion) {
        SharedEngine::on_orientation(*self, quat)
    }

    fn on_pose(&mut self, gesture: Gesture) -> UnlockRequest {
        SharedEngine::on_pose(*self, gesture)
    }

    fn on_arm_sync(&mut self, arm: Arm) {
        SharedEngine::on_arm_sync(*self, arm)
    }

    fn on_arm_unsync(&mut self) {
        SharedEngine::on_arm_unsync(*self)
    }

    fn on_unlock(&mut self) {
        SharedEngine::on_unlock(*self)
    }

    fn on_lock(&mut self) {
        SharedEngine::on_lock(*self)
    }

    fn on_unpair(&mut self) {
        SharedEngine::on_unpair(*self)
    }
}
