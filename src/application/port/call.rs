// SPDX-License-Identifier: MPL-2.0
//! Call control port definition.

/// Port for answering calls on the paired phone.
pub trait CallControl {
    fn accept_call(&mut self);
    fn reject_call(&mut self);
    fn mute_call(&mut self);
}
