//! Shared-password prompt guarding add, edit and delete.
//!
//! The passcode is a fixed value known to every visitor who asks for it. It
//! separates casual viewers from intentional editors and provides no security
//! guarantee: the write routes themselves are not protected by it.

use secrecy::{ExposeSecret, Secret};

use crate::{
    domain::{Notifier, Severity, Toast},
    utils::constants::GATE_PASSCODE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Accepted,
    Rejected,
    /// The prompt was not showing, nothing was compared.
    NotOpen,
}

#[derive(Debug, Default)]
pub struct Gate {
    open: bool,
    input: Option<Secret<String>>,
}

/// Byte-for-byte comparison against the shared passcode.
pub fn validate(input: &Secret<String>) -> bool {
    input.expose_secret().as_bytes() == GATE_PASSCODE.as_bytes()
}

impl Gate {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Input left in the prompt by a rejected attempt.
    pub fn input(&self) -> Option<&Secret<String>> {
        self.input.as_ref()
    }

    #[tracing::instrument(name = "Submitting gate passcode", skip_all)]
    pub fn submit(
        &mut self,
        input: Secret<String>,
        notifier: &mut impl Notifier,
    ) -> GateOutcome {
        if !self.open {
            tracing::debug!("passcode submitted while the gate was closed");
            return GateOutcome::NotOpen;
        }

        if validate(&input) {
            self.close();
            notifier.notify(Toast {
                title: "Access Granted".to_owned(),
                message: "Password validated successfully".to_owned(),
                severity: Severity::Normal,
            });
            GateOutcome::Accepted
        } else {
            self.input = Some(input);
            notifier.notify(Toast {
                title: "Access Denied".to_owned(),
                message: "Incorrect password. Please try again.".to_owned(),
                severity: Severity::Error,
            });
            GateOutcome::Rejected
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.input = None;
    }
}
