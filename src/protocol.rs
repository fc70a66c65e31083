//! The value exchange surface through which the host drives the controller.

use crate::controller::CarFollowingModel;
#[cfg(feature = "debug")]
use crate::debug::take_debug_frame;
use crate::selector::{Command, GetRule, Selector, SetRule, Value};
use crate::vehicle::{IdmParameters, LEADER_SLOT};
use crate::{Error, Result};
use log::debug;

/// An external driver model.
///
/// Each simulation step the host pushes the state of one vehicle with
/// [Self::set_value], issues [Command::MoveDriver], and pulls the suggestions
/// back with [Self::get_value].
#[derive(Clone, Debug)]
pub struct DriverModel {
    model: CarFollowingModel,
}

impl Default for DriverModel {
    fn default() -> Self {
        Self::new(&IdmParameters::default())
    }
}

impl DriverModel {
    /// Creates a new driver model.
    pub fn new(params: &IdmParameters) -> Self {
        Self {
            model: CarFollowingModel::new(params),
        }
    }

    /// The underlying car following controller.
    pub fn model(&self) -> &CarFollowingModel {
        &self.model
    }

    /// Pushes a value into the model.
    ///
    /// The selector determines which of `long_value` and `double_value` is used.
    /// Neighbour selectors are only recorded for the leader slot `(0, 1)`;
    /// other slots are acknowledged and discarded.
    pub fn set_value(
        &mut self,
        selector: i64,
        index1: i64,
        index2: i64,
        long_value: i64,
        double_value: f64,
        _string_value: Option<&str>,
    ) -> Result<()> {
        let selector = parse_selector(selector)?;
        match selector.set_rule() {
            Some(SetRule::Store(field)) => {
                if !field.is_neighbour() || (index1, index2) == LEADER_SLOT {
                    let value = Value::pick(field.kind(), long_value, double_value);
                    self.model.observe(field, value);
                }
                Ok(())
            }
            Some(SetRule::Ignore) => Ok(()),
            None => {
                debug!("rejected write to {:?}", selector);
                Err(Error::UnsupportedSet(selector))
            }
        }
    }

    /// Pulls a value out of the model.
    pub fn get_value(&self, selector: i64, _index1: i64, _index2: i64) -> Result<Value> {
        let selector = parse_selector(selector)?;
        match selector.get_rule() {
            Some(GetRule::Read(field)) => Ok(self.model.result(field)),
            Some(GetRule::Constant(value)) => Ok(value),
            None => {
                debug!("rejected read of {:?}", selector);
                Err(Error::UnsupportedGet(selector))
            }
        }
    }

    /// Executes a lifecycle command.
    pub fn execute_command(&mut self, command: i64) -> Result<()> {
        match Command::from_code(command) {
            Some(Command::Init) | Some(Command::CreateDriver) | Some(Command::KillDriver) => Ok(()),
            Some(Command::MoveDriver) => {
                self.model.step();
                Ok(())
            }
            None => {
                debug!("rejected command {}", command);
                Err(Error::UnsupportedCommand(command))
            }
        }
    }

    /// Gets the debugging information recorded since the last call as a JSON array.
    #[cfg(feature = "debug")]
    pub fn debug(&mut self) -> serde_json::Value {
        take_debug_frame()
    }
}

fn parse_selector(code: i64) -> Result<Selector> {
    Selector::from_code(code).ok_or_else(|| {
        debug!("unknown selector {}", code);
        Error::UnsupportedSelector(code)
    })
}
