use std::fmt::Debug;

use crate::{DeviceId, Signal};

/// The external mechanism that knows whether a [`Signal`] has actually fired on a device.
///
/// This is the seam between the fence bookkeeping and the device runtime. The runtime
/// integration implements this trait; the crate itself ships only [`HostBackend`], the
/// fallback for builds without any accelerator runtime.
///
/// Both operations may be called repeatedly for the same signal; a backend must keep
/// answering truthfully after the signal has fired.
pub trait DeviceBackend: Debug {
    /// Whether the given signal has fired on the given device. Never blocks.
    fn has_fired(&self, device: DeviceId, signal: Signal) -> bool;

    /// Blocks the calling thread until the given signal has fired on the given device.
    fn wait_until_fired(&self, device: DeviceId, signal: Signal);
}

/// The backend of a host-only build: there is no device timeline separate from the host, so
/// every signal has fired the moment it is observed.
///
/// This is the default backend of [`Event`][crate::Event].
#[derive(Clone, Copy, Debug, Default)]
pub struct HostBackend;

impl DeviceBackend for HostBackend {
    #[inline]
    fn has_fired(&self, _device: DeviceId, _signal: Signal) -> bool {
        true
    }

    #[inline]
    fn wait_until_fired(&self, _device: DeviceId, _signal: Signal) {}
}
