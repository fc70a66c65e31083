//! The selector catalogue of the value exchange protocol.
//!
//! Every selector the host may send is listed in [SET_RULES] and/or [GET_RULES].
//! A selector with an [SetRule::Ignore] rule is acknowledged without touching
//! any state; a selector absent from a table is unsupported in that direction.

/// A data selector, identified on the wire by its numeric code.
///
/// The codes are this crate's own numbering, grouped by hundreds. A host loading
/// the library must use the same values as its `DriverModel.h`; the get-only
/// selectors [Selector::Status], [Selector::WantsSuggestion] and
/// [Selector::SimpleLaneChange] (801-803) in particular have no host header
/// value checked against them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum Selector {
    Path = 101,
    Timestep = 102,
    Time = 103,
    VehId = 201,
    VehLane = 202,
    VehOdometer = 203,
    VehLaneAngle = 204,
    VehLateralPosition = 205,
    VehVelocity = 206,
    VehAcceleration = 207,
    VehLength = 208,
    VehWidth = 209,
    VehWeight = 210,
    VehMaxAcceleration = 211,
    VehTurningIndicator = 212,
    VehCategory = 213,
    VehPreferredRelLane = 214,
    VehUsePreferredLane = 215,
    VehDesiredVelocity = 216,
    VehXCoordinate = 217,
    VehYCoordinate = 218,
    VehType = 219,
    VehColor = 220,
    VehCurrentLink = 221,
    VehNextLinks = 222,
    VehActiveLaneChange = 223,
    VehRelTargetLane = 224,
    NvehId = 301,
    NvehLaneAngle = 302,
    NvehLateralPosition = 303,
    NvehDistance = 304,
    NvehRelVelocity = 305,
    NvehAcceleration = 306,
    NvehLength = 307,
    NvehWidth = 308,
    NvehWeight = 309,
    NvehTurningIndicator = 310,
    NvehCategory = 311,
    NvehLaneChange = 312,
    NoOfLanes = 401,
    LaneWidth = 402,
    LaneEndDistance = 403,
    Radius = 501,
    MinRadius = 502,
    DistToMinRadius = 503,
    Slope = 504,
    SlopeAhead = 505,
    SignalDistance = 601,
    SignalState = 602,
    SignalStateStart = 603,
    SpeedLimitDistance = 604,
    SpeedLimitValue = 605,
    DesiredAcceleration = 701,
    DesiredLaneAngle = 702,
    ActiveLaneChange = 703,
    RelTargetLane = 704,
    Status = 801,
    WantsSuggestion = 802,
    SimpleLaneChange = 803,
}

impl Selector {
    const ALL: [Selector; 59] = {
        use crate::selector::Selector::*;
        [
            Path, Timestep, Time,
            VehId, VehLane, VehOdometer, VehLaneAngle, VehLateralPosition, VehVelocity,
            VehAcceleration, VehLength, VehWidth, VehWeight, VehMaxAcceleration,
            VehTurningIndicator, VehCategory, VehPreferredRelLane, VehUsePreferredLane,
            VehDesiredVelocity, VehXCoordinate, VehYCoordinate, VehType, VehColor,
            VehCurrentLink, VehNextLinks, VehActiveLaneChange, VehRelTargetLane,
            NvehId, NvehLaneAngle, NvehLateralPosition, NvehDistance, NvehRelVelocity,
            NvehAcceleration, NvehLength, NvehWidth, NvehWeight, NvehTurningIndicator,
            NvehCategory, NvehLaneChange,
            NoOfLanes, LaneWidth, LaneEndDistance,
            Radius, MinRadius, DistToMinRadius, Slope, SlopeAhead,
            SignalDistance, SignalState, SignalStateStart, SpeedLimitDistance, SpeedLimitValue,
            DesiredAcceleration, DesiredLaneAngle, ActiveLaneChange, RelTargetLane,
            Status, WantsSuggestion, SimpleLaneChange,
        ]
    };

    /// Looks up a selector by its wire code.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }

    /// The wire code of the selector.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// How a value pushed under this selector is handled, if it may be pushed at all.
    pub fn set_rule(self) -> Option<SetRule> {
        lookup(SET_RULES, self)
    }

    /// How a value pulled under this selector is produced, if it may be pulled at all.
    pub fn get_rule(self) -> Option<GetRule> {
        lookup(GET_RULES, self)
    }
}

fn lookup<R: Copy>(table: &[(Selector, R)], selector: Selector) -> Option<R> {
    table
        .iter()
        .find(|(s, _)| *s == selector)
        .map(|(_, rule)| *rule)
}

/// A field of the controller state addressable through the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Time,
    VehicleId,
    Velocity,
    Acceleration,
    Length,
    TurningIndicator,
    DesiredVelocity,
    XCoordinate,
    YCoordinate,
    VehicleType,
    Color,
    CurrentLink,
    LeaderId,
    LeaderDistance,
    LeaderRelVelocity,
    LeaderAcceleration,
    SignalDistance,
    SignalState,
    DesiredAcceleration,
    DesiredLaneAngle,
    ActiveLaneChange,
    RelTargetLane,
}

/// Whether a field carries an integer or a real value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Long,
    Double,
}

impl Field {
    /// The kind of value the field holds.
    pub fn kind(self) -> ValueKind {
        use Field::*;
        match self {
            VehicleId | TurningIndicator | VehicleType | Color | CurrentLink | LeaderId
            | SignalState | ActiveLaneChange | RelTargetLane => ValueKind::Long,
            _ => ValueKind::Double,
        }
    }

    /// Whether the field describes a neighbouring vehicle,
    /// and is therefore only recorded for the leader slot.
    pub fn is_neighbour(self) -> bool {
        use Field::*;
        matches!(
            self,
            LeaderId | LeaderDistance | LeaderRelVelocity | LeaderAcceleration
        )
    }
}

/// A single value exchanged with the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Long(i64),
    Double(f64),
}

impl Value {
    /// Picks whichever of the two raw values the given kind refers to.
    pub fn pick(kind: ValueKind, long: i64, double: f64) -> Self {
        match kind {
            ValueKind::Long => Value::Long(long),
            ValueKind::Double => Value::Double(double),
        }
    }

    /// The value as an integer, truncating reals.
    pub fn as_long(self) -> i64 {
        match self {
            Value::Long(v) => v,
            Value::Double(v) => v as i64,
        }
    }

    /// The value as a real.
    pub fn as_double(self) -> f64 {
        match self {
            Value::Long(v) => v as f64,
            Value::Double(v) => v,
        }
    }
}

/// How a pushed value is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetRule {
    /// Stores the value in a field.
    Store(Field),
    /// Acknowledges the value without storing it.
    Ignore,
}

/// How a pulled value is produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GetRule {
    /// Reads a field.
    Read(Field),
    /// Always answers with the same value.
    Constant(Value),
}

/// The selectors which may be pushed by the host.
pub const SET_RULES: &[(Selector, SetRule)] = {
    use self::Field as F;
    use self::SetRule::*;
    use self::Selector as S;
    &[
        (S::Path, Ignore),
        (S::Timestep, Ignore),
        (S::Time, Store(F::Time)),
        (S::VehId, Store(F::VehicleId)),
        (S::VehLane, Ignore),
        (S::VehOdometer, Ignore),
        (S::VehLaneAngle, Ignore),
        (S::VehLateralPosition, Ignore),
        (S::VehVelocity, Store(F::Velocity)),
        (S::VehAcceleration, Store(F::Acceleration)),
        (S::VehLength, Store(F::Length)),
        (S::VehWidth, Ignore),
        (S::VehWeight, Ignore),
        (S::VehMaxAcceleration, Ignore),
        (S::VehTurningIndicator, Store(F::TurningIndicator)),
        (S::VehCategory, Ignore),
        (S::VehPreferredRelLane, Ignore),
        (S::VehUsePreferredLane, Ignore),
        (S::VehDesiredVelocity, Store(F::DesiredVelocity)),
        (S::VehXCoordinate, Store(F::XCoordinate)),
        (S::VehYCoordinate, Store(F::YCoordinate)),
        (S::VehType, Store(F::VehicleType)),
        (S::VehColor, Store(F::Color)),
        (S::VehCurrentLink, Store(F::CurrentLink)),
        (S::VehNextLinks, Ignore),
        (S::VehActiveLaneChange, Ignore),
        (S::VehRelTargetLane, Ignore),
        (S::NvehId, Store(F::LeaderId)),
        (S::NvehLaneAngle, Ignore),
        (S::NvehLateralPosition, Ignore),
        (S::NvehDistance, Store(F::LeaderDistance)),
        (S::NvehRelVelocity, Store(F::LeaderRelVelocity)),
        (S::NvehAcceleration, Store(F::LeaderAcceleration)),
        (S::NvehLength, Ignore),
        (S::NvehWidth, Ignore),
        (S::NvehWeight, Ignore),
        (S::NvehTurningIndicator, Ignore),
        (S::NvehCategory, Ignore),
        (S::NvehLaneChange, Ignore),
        (S::NoOfLanes, Ignore),
        (S::LaneWidth, Ignore),
        (S::LaneEndDistance, Ignore),
        (S::Radius, Ignore),
        (S::MinRadius, Ignore),
        (S::DistToMinRadius, Ignore),
        (S::Slope, Ignore),
        (S::SlopeAhead, Ignore),
        (S::SignalDistance, Store(F::SignalDistance)),
        (S::SignalState, Store(F::SignalState)),
        (S::SignalStateStart, Ignore),
        (S::SpeedLimitDistance, Ignore),
        (S::SpeedLimitValue, Ignore),
        (S::DesiredAcceleration, Store(F::DesiredAcceleration)),
        (S::DesiredLaneAngle, Store(F::DesiredLaneAngle)),
        (S::ActiveLaneChange, Store(F::ActiveLaneChange)),
        (S::RelTargetLane, Store(F::RelTargetLane)),
    ]
};

/// The selectors which may be pulled by the host.
pub const GET_RULES: &[(Selector, GetRule)] = {
    use self::Field as F;
    use self::GetRule::*;
    use self::Selector as S;
    &[
        (S::Status, Constant(Value::Long(0))),
        (S::Time, Read(F::Time)),
        (S::VehId, Read(F::VehicleId)),
        (S::VehVelocity, Read(F::Velocity)),
        (S::VehAcceleration, Read(F::Acceleration)),
        (S::VehLength, Read(F::Length)),
        (S::VehTurningIndicator, Read(F::TurningIndicator)),
        (S::VehDesiredVelocity, Read(F::DesiredVelocity)),
        (S::VehXCoordinate, Read(F::XCoordinate)),
        (S::VehYCoordinate, Read(F::YCoordinate)),
        (S::VehType, Read(F::VehicleType)),
        (S::VehColor, Read(F::Color)),
        (S::VehCurrentLink, Read(F::CurrentLink)),
        (S::NvehDistance, Read(F::LeaderDistance)),
        (S::NvehRelVelocity, Read(F::LeaderRelVelocity)),
        (S::SignalDistance, Read(F::SignalDistance)),
        (S::WantsSuggestion, Constant(Value::Long(1))),
        (S::DesiredAcceleration, Read(F::DesiredAcceleration)),
        (S::DesiredLaneAngle, Read(F::DesiredLaneAngle)),
        (S::ActiveLaneChange, Read(F::ActiveLaneChange)),
        (S::RelTargetLane, Read(F::RelTargetLane)),
        (S::SimpleLaneChange, Constant(Value::Long(1))),
    ]
};

/// A lifecycle command issued by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i64)]
pub enum Command {
    Init = 0,
    CreateDriver = 1,
    KillDriver = 2,
    MoveDriver = 3,
}

impl Command {
    /// Looks up a command by its wire code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Command::Init),
            1 => Some(Command::CreateDriver),
            2 => Some(Command::KillDriver),
            3 => Some(Command::MoveDriver),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_round_trip() {
        for selector in Selector::ALL {
            assert_eq!(Selector::from_code(selector.code()), Some(selector));
        }
        assert_eq!(Selector::from_code(0), None);
        assert_eq!(Selector::from_code(999), None);
    }

    #[test]
    fn every_selector_is_catalogued() {
        for selector in Selector::ALL {
            assert!(
                selector.set_rule().is_some() || selector.get_rule().is_some(),
                "{:?} has no rule",
                selector
            );
        }
    }

    #[test]
    fn tables_have_no_duplicates() {
        let set: HashSet<_> = SET_RULES.iter().map(|(s, _)| *s).collect();
        assert_eq!(set.len(), SET_RULES.len());
        let get: HashSet<_> = GET_RULES.iter().map(|(s, _)| *s).collect();
        assert_eq!(get.len(), GET_RULES.len());
    }

    #[test]
    fn stored_fields_have_matching_kinds() {
        assert_eq!(Field::VehicleId.kind(), ValueKind::Long);
        assert_eq!(Field::LeaderId.kind(), ValueKind::Long);
        assert_eq!(Field::LeaderDistance.kind(), ValueKind::Double);
        assert_eq!(Field::DesiredAcceleration.kind(), ValueKind::Double);
        assert_eq!(Field::ActiveLaneChange.kind(), ValueKind::Long);
    }

    #[test]
    fn ignored_and_unreadable() {
        assert_eq!(Selector::VehWidth.set_rule(), Some(SetRule::Ignore));
        assert_eq!(Selector::VehWidth.get_rule(), None);
        assert_eq!(Selector::Status.set_rule(), None);
        assert_eq!(Selector::NvehId.get_rule(), None);
        assert_eq!(Selector::NvehAcceleration.get_rule(), None);
    }

    #[test]
    fn commands() {
        assert_eq!(Command::from_code(3), Some(Command::MoveDriver));
        assert_eq!(Command::from_code(4), None);
        assert_eq!(Command::from_code(-1), None);
    }
}
