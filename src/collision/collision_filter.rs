use bitflags::bitflags;

bitflags! {
    /// A bit mask representing a collision category
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionGroup: u32 {
        /// Default group (collides with everything)
        const DEFAULT  = 0x00000001;

        /// Static world objects
        const STATIC   = 0x00000002;

        /// Dynamic objects
        const DYNAMIC  = 0x00000004;

        /// Kinematic objects
        const KINEMATIC = 0x00000008;

        /// Character objects
        const CHARACTER = 0x00000010;

        /// Projectile objects
        const PROJECTILE = 0x00000020;

        /// Sensor/trigger objects (detect but don't resolve)
        const SENSOR   = 0x00000040;

        /// Debris objects
        const DEBRIS   = 0x00000080;

        /// All groups
        const ALL      = 0xFFFFFFFF;
    }
}

/// Type alias for a collision mask (what groups this object collides with)
pub type CollisionMask = CollisionGroup;

/// Decides whether two shapes may form a contact at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionFilter {
    /// The categories this shape belongs to
    pub category: CollisionGroup,

    /// The categories this shape accepts contacts with
    pub mask: CollisionMask,

    /// Shapes sharing a non-zero group always collide when it is positive
    /// and never collide when it is negative, regardless of the bits
    pub group_index: i16,
}

impl CollisionFilter {
    /// Creates a filter from a category and a mask
    pub fn new(category: CollisionGroup, mask: CollisionMask) -> Self {
        Self {
            category,
            mask,
            group_index: 0,
        }
    }

    /// Sets the group index
    pub fn with_group_index(mut self, group_index: i16) -> Self {
        self.group_index = group_index;
        self
    }

    /// Returns whether shapes carrying these two filters should collide
    pub fn should_collide(&self, other: &CollisionFilter) -> bool {
        if self.group_index == other.group_index && self.group_index != 0 {
            return self.group_index > 0;
        }

        self.mask.intersects(other.category) && other.mask.intersects(self.category)
    }
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self::new(CollisionGroup::DEFAULT, CollisionMask::ALL)
    }
}
