use std::fmt;

/// Unique identifier for any entity tracked in the world registry.
///
/// Sessions and registries hold ids, never references, so a despawned actor
/// simply stops resolving instead of dangling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a skill or of the effect a channeling skill applies per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u32);

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skill:{}", self.0)
    }
}

/// World position in game units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`, including the z axis.
    pub fn distance_to(&self, other: Position) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        let dz = (self.z - other.z) as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Returns true when `other` lies within `range` game units.
    pub fn is_within_range(&self, other: Position, range: u32) -> bool {
        self.distance_to(other) <= range as f64
    }

    /// Heading from this position towards `other`, in degrees `[0, 360)`.
    ///
    /// Planar (x/y) only; elevation does not affect the fan sector test.
    pub fn heading_deg_to(&self, other: Position) -> f64 {
        let dy = (other.y - self.y) as f64;
        let dx = (other.x - self.x) as f64;
        let deg = dy.atan2(dx).to_degrees();
        if deg < 0.0 { deg + 360.0 } else { deg }
    }
}

/// A depletable resource pool (hp, mp).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub max: u32,
}

impl ResourceMeter {
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub const fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    pub const fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Current value as a fraction of the maximum, in `[0.0, 1.0]`.
    ///
    /// A zero maximum reads as empty rather than dividing by zero.
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f64 / self.max as f64
    }

    /// Spends `amount` if fully affordable. Returns false (and leaves the
    /// meter untouched) when the balance is insufficient.
    pub fn try_spend(&mut self, amount: u32) -> bool {
        if self.current < amount {
            return false;
        }
        self.current -= amount;
        true
    }

    pub fn restore(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.max);
    }
}

bitflags::bitflags! {
    /// Zones the actor currently stands in.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ZoneFlags: u8 {
        /// No-harm zone; harmful ground casts are rejected here.
        const PEACE = 1 << 0;
        /// Open-PvP zone; relaxes the hostile-only clan exclusions.
        const PVP   = 1 << 1;
        /// Active siege battlefield.
        const SIEGE = 1 << 2;
    }
}

bitflags::bitflags! {
    /// Per-cast ammunition charges carried by a caster.
    ///
    /// A channel tick discharges the charge it consumed and immediately
    /// recharges whatever the caster has set to auto-recharge.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ShotCharges: u8 {
        const SOULSHOT           = 1 << 0;
        const SPIRITSHOT         = 1 << 1;
        const BLESSED_SPIRITSHOT = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_spend_is_all_or_nothing() {
        let mut mp = ResourceMeter::new(3, 100);
        assert!(!mp.try_spend(5));
        assert_eq!(mp.current, 3);
        assert!(mp.try_spend(3));
        assert!(mp.is_empty());
    }

    #[test]
    fn heading_follows_quadrants() {
        let origin = Position::ORIGIN;
        assert_eq!(origin.heading_deg_to(Position::new(10, 0, 0)), 0.0);
        assert_eq!(origin.heading_deg_to(Position::new(0, 10, 0)), 90.0);
        assert_eq!(origin.heading_deg_to(Position::new(-10, 0, 0)), 180.0);
        assert_eq!(origin.heading_deg_to(Position::new(0, -10, 0)), 270.0);
    }

    #[test]
    fn range_check_includes_elevation() {
        let a = Position::new(0, 0, 0);
        let b = Position::new(0, 0, 500);
        assert!(!a.is_within_range(b, 400));
        assert!(a.is_within_range(b, 500));
    }
}
