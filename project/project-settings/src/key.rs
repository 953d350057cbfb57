//! The closed set of settings keys and the external-key mapping table.

use std::fmt;

/// Allowed fuzzy-skin modes.
pub const FUZZY_SKIN_MODES: &[&str] = &["None", "Outer", "All"];

/// Allowed sparse infill patterns.
pub const INFILL_PATTERNS: &[&str] = &[
    "Grid",
    "Gyroid",
    "Cubic",
    "Lines",
    "Triangles",
    "Honeycomb",
    "CubicSubdivision",
    "SupportCubic",
];

/// Allowed support types.
///
/// `Standard` is the assistant's name for `Normal`.
pub const SUPPORT_TYPES: &[&str] = &["None", "Normal", "Tree", "Standard"];

/// Allowed brim types, including the assistant's `skirt`/`brim`/`raft`.
pub const BRIM_TYPES: &[&str] = &[
    "none",
    "outer_brim",
    "inner_brim",
    "outer_and_inner_brim",
    "skirt",
    "brim",
    "raft",
];

/// Allowed seam strategies.
pub const SEAM_POSITIONS: &[&str] = &[
    "Nearest",
    "Random",
    "Back",
    "Aligned",
    "Shortest",
    "User Specified",
];

/// Allowed filament materials.
pub const FILAMENT_TYPES: &[&str] = &["PLA", "PETG", "ABS", "ASA", "TPU", "Other"];

/// Allowed bed shapes.
pub const BED_SHAPES: &[&str] = &["Rectangular", "Circular"];

/// Value constraint attached to each key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Non-negative finite number in the given unit.
    Measure(&'static str),
    /// Any finite number in the given unit.
    Offset(&'static str),
    /// Non-negative integer.
    Count,
    /// Number in `0..=100`.
    Percent,
    /// Number of degrees in `0..=360`.
    Angle,
    /// Boolean.
    Toggle,
    /// One of a closed set of strings, matched case-insensitively.
    Choice(&'static [&'static str]),
}

impl SettingKind {
    /// Unit suffix for display, if any.
    #[must_use]
    pub const fn unit(self) -> Option<&'static str> {
        match self {
            Self::Measure(unit) | Self::Offset(unit) => Some(unit),
            Self::Percent => Some("%"),
            Self::Angle => Some("°"),
            Self::Count | Self::Toggle | Self::Choice(_) => None,
        }
    }

    /// Human-readable description of what the kind accepts.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::Measure(unit) => format!("a non-negative number ({unit})"),
            Self::Offset(unit) => format!("a finite number ({unit})"),
            Self::Count => "a non-negative integer".to_string(),
            Self::Percent => "a percentage between 0 and 100".to_string(),
            Self::Angle => "an angle between 0 and 360 degrees".to_string(),
            Self::Toggle => "a boolean".to_string(),
            Self::Choice(options) => format!("one of {}", options.join(", ")),
        }
    }
}

/// Section a key belongs to, in settings-panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingGroup {
    /// Layer heights and line widths.
    Quality,
    /// Perimeters and shells.
    Walls,
    /// Sparse infill.
    Infill,
    /// Support structures and rafts.
    Supports,
    /// Feature speeds and acceleration.
    Speed,
    /// Brim and first-layer compensation.
    BedAdhesion,
    /// Seam, retraction and flow limits.
    Advanced,
    /// Filament properties and temperatures.
    Filament,
    /// Part cooling.
    Cooling,
    /// Printer context, never emitted.
    Printer,
}

impl fmt::Display for SettingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quality => "Quality",
            Self::Walls => "Walls",
            Self::Infill => "Infill",
            Self::Supports => "Supports",
            Self::Speed => "Speed",
            Self::BedAdhesion => "Bed Adhesion",
            Self::Advanced => "Advanced",
            Self::Filament => "Filament",
            Self::Cooling => "Cooling",
            Self::Printer => "Printer",
        })
    }
}

/// Every named parameter of a settings record.
///
/// Internal names are camelCase (`layerHeight`); see [`SettingKey::name`].
/// [`SettingKey::external_key`] is the mapping table into the slicer's
/// vocabulary; it is an exhaustive match, so adding a variant without
/// deciding its mapping does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum SettingKey {
    // Quality
    LayerHeight,
    FirstLayerHeight,
    LineWidth,
    FirstLayerLineWidth,
    VariableLayerHeight,

    // Walls
    WallLoops,
    TopShellLayers,
    TopShellThickness,
    BottomShellLayers,
    BottomShellThickness,
    EnsureVerticalShellThickness,
    FuzzySkin,

    // Infill
    InfillDensity,
    InfillPattern,
    InfillDirection,
    InfillWallOverlap,
    MinimumInfillArea,

    // Supports
    EnableSupports,
    SupportType,
    SupportOnBuildPlateOnly,
    SupportOverhangAngle,
    SupportTopZDistance,
    SupportBottomZDistance,
    SupportObjectXyDistance,
    RaftLayers,

    // Speed
    FirstLayerSpeed,
    OuterWallSpeed,
    InnerWallSpeed,
    SparseInfillSpeed,
    SolidInfillSpeed,
    TopSurfaceSpeed,
    SupportSpeed,
    TravelSpeed,
    Acceleration,
    MinPrintSpeed,

    // Bed adhesion
    BrimType,
    ElephantFootCompensation,

    // Advanced
    SeamPosition,
    SequentialPrinting,
    RetractionLength,
    RetractionSpeed,
    ZHopWhenRetracted,
    MaxVolumetricSpeed,

    // Filament
    FilamentType,
    FilamentDiameter,
    FlowRatio,
    PressureAdvance,
    FilamentCost,
    FilamentDensity,
    NozzleTemp,
    FirstLayerNozzleTemp,
    BedTemp,
    FirstLayerBedTemp,

    // Cooling
    EnableFan,
    FanSpeed,
    KeepFanAlwaysOn,
    SlowDownForCoolDown,

    // Printer
    NozzleDiameter,
    BedShape,
    PrintableAreaX,
    PrintableAreaY,
    OriginX,
    OriginY,
}

impl SettingKey {
    /// All keys in declaration order.
    pub const ALL: [Self; 63] = [
        Self::LayerHeight,
        Self::FirstLayerHeight,
        Self::LineWidth,
        Self::FirstLayerLineWidth,
        Self::VariableLayerHeight,
        Self::WallLoops,
        Self::TopShellLayers,
        Self::TopShellThickness,
        Self::BottomShellLayers,
        Self::BottomShellThickness,
        Self::EnsureVerticalShellThickness,
        Self::FuzzySkin,
        Self::InfillDensity,
        Self::InfillPattern,
        Self::InfillDirection,
        Self::InfillWallOverlap,
        Self::MinimumInfillArea,
        Self::EnableSupports,
        Self::SupportType,
        Self::SupportOnBuildPlateOnly,
        Self::SupportOverhangAngle,
        Self::SupportTopZDistance,
        Self::SupportBottomZDistance,
        Self::SupportObjectXyDistance,
        Self::RaftLayers,
        Self::FirstLayerSpeed,
        Self::OuterWallSpeed,
        Self::InnerWallSpeed,
        Self::SparseInfillSpeed,
        Self::SolidInfillSpeed,
        Self::TopSurfaceSpeed,
        Self::SupportSpeed,
        Self::TravelSpeed,
        Self::Acceleration,
        Self::MinPrintSpeed,
        Self::BrimType,
        Self::ElephantFootCompensation,
        Self::SeamPosition,
        Self::SequentialPrinting,
        Self::RetractionLength,
        Self::RetractionSpeed,
        Self::ZHopWhenRetracted,
        Self::MaxVolumetricSpeed,
        Self::FilamentType,
        Self::FilamentDiameter,
        Self::FlowRatio,
        Self::PressureAdvance,
        Self::FilamentCost,
        Self::FilamentDensity,
        Self::NozzleTemp,
        Self::FirstLayerNozzleTemp,
        Self::BedTemp,
        Self::FirstLayerBedTemp,
        Self::EnableFan,
        Self::FanSpeed,
        Self::KeepFanAlwaysOn,
        Self::SlowDownForCoolDown,
        Self::NozzleDiameter,
        Self::BedShape,
        Self::PrintableAreaX,
        Self::PrintableAreaY,
        Self::OriginX,
        Self::OriginY,
    ];

    /// Internal camelCase name, as used in settings records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LayerHeight => "layerHeight",
            Self::FirstLayerHeight => "firstLayerHeight",
            Self::LineWidth => "lineWidth",
            Self::FirstLayerLineWidth => "firstLayerLineWidth",
            Self::VariableLayerHeight => "variableLayerHeight",
            Self::WallLoops => "wallLoops",
            Self::TopShellLayers => "topShellLayers",
            Self::TopShellThickness => "topShellThickness",
            Self::BottomShellLayers => "bottomShellLayers",
            Self::BottomShellThickness => "bottomShellThickness",
            Self::EnsureVerticalShellThickness => "ensureVerticalShellThickness",
            Self::FuzzySkin => "fuzzySkin",
            Self::InfillDensity => "infillDensity",
            Self::InfillPattern => "infillPattern",
            Self::InfillDirection => "infillDirection",
            Self::InfillWallOverlap => "infillWallOverlap",
            Self::MinimumInfillArea => "minimumInfillArea",
            Self::EnableSupports => "enableSupports",
            Self::SupportType => "supportType",
            Self::SupportOnBuildPlateOnly => "supportOnBuildPlateOnly",
            Self::SupportOverhangAngle => "supportOverhangAngle",
            Self::SupportTopZDistance => "supportTopZDistance",
            Self::SupportBottomZDistance => "supportBottomZDistance",
            Self::SupportObjectXyDistance => "supportObjectXYDistance",
            Self::RaftLayers => "raftLayers",
            Self::FirstLayerSpeed => "firstLayerSpeed",
            Self::OuterWallSpeed => "outerWallSpeed",
            Self::InnerWallSpeed => "innerWallSpeed",
            Self::SparseInfillSpeed => "sparseInfillSpeed",
            Self::SolidInfillSpeed => "solidInfillSpeed",
            Self::TopSurfaceSpeed => "topSurfaceSpeed",
            Self::SupportSpeed => "supportSpeed",
            Self::TravelSpeed => "travelSpeed",
            Self::Acceleration => "acceleration",
            Self::MinPrintSpeed => "minPrintSpeed",
            Self::BrimType => "brimType",
            Self::ElephantFootCompensation => "elephantFootCompensation",
            Self::SeamPosition => "seamPosition",
            Self::SequentialPrinting => "sequentialPrinting",
            Self::RetractionLength => "retractionLength",
            Self::RetractionSpeed => "retractionSpeed",
            Self::ZHopWhenRetracted => "zHopWhenRetracted",
            Self::MaxVolumetricSpeed => "maxVolumetricSpeed",
            Self::FilamentType => "filamentType",
            Self::FilamentDiameter => "filamentDiameter",
            Self::FlowRatio => "flowRatio",
            Self::PressureAdvance => "pressureAdvance",
            Self::FilamentCost => "filamentCost",
            Self::FilamentDensity => "filamentDensity",
            Self::NozzleTemp => "nozzleTemp",
            Self::FirstLayerNozzleTemp => "firstLayerNozzleTemp",
            Self::BedTemp => "bedTemp",
            Self::FirstLayerBedTemp => "firstLayerBedTemp",
            Self::EnableFan => "enableFan",
            Self::FanSpeed => "fanSpeed",
            Self::KeepFanAlwaysOn => "keepFanAlwaysOn",
            Self::SlowDownForCoolDown => "slowDownForCoolDown",
            Self::NozzleDiameter => "nozzleDiameter",
            Self::BedShape => "bedShape",
            Self::PrintableAreaX => "printableAreaX",
            Self::PrintableAreaY => "printableAreaY",
            Self::OriginX => "originX",
            Self::OriginY => "originY",
        }
    }

    /// Look a key up by its internal name. Matching is exact.
    ///
    /// # Example
    ///
    /// ```
    /// use project_settings::SettingKey;
    ///
    /// assert_eq!(SettingKey::from_name("layerHeight"), Some(SettingKey::LayerHeight));
    /// assert_eq!(SettingKey::from_name("layer_height"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// External slicer key, or `None` for keys that are never emitted.
    ///
    /// This is the mapping table. It is pinned to OrcaSlicer's process
    /// profile vocabulary and is not derived from the record schema.
    #[must_use]
    pub const fn external_key(self) -> Option<&'static str> {
        let key = match self {
            Self::LayerHeight => "layer_height",
            Self::FirstLayerHeight => "initial_layer_height",
            Self::LineWidth => "line_width",
            Self::FirstLayerLineWidth => "initial_layer_line_width",
            Self::VariableLayerHeight => "adaptive_layer_height",
            Self::WallLoops => "wall_loops",
            Self::TopShellLayers => "top_shell_layers",
            Self::TopShellThickness => "top_shell_thickness",
            Self::BottomShellLayers => "bottom_shell_layers",
            Self::BottomShellThickness => "bottom_shell_thickness",
            Self::EnsureVerticalShellThickness => "ensure_vertical_shell_thickness",
            Self::FuzzySkin => "fuzzy_skin",
            Self::InfillDensity => "sparse_infill_density",
            Self::InfillPattern => "sparse_infill_pattern",
            Self::InfillDirection => "infill_direction",
            Self::InfillWallOverlap => "infill_wall_overlap",
            Self::MinimumInfillArea => "min_infill_area",
            Self::EnableSupports => "support_enable",
            Self::SupportType => "support_type",
            Self::SupportOnBuildPlateOnly => "support_on_build_plate_only",
            Self::SupportOverhangAngle => "support_threshold_angle",
            Self::SupportTopZDistance => "support_top_z_distance",
            Self::SupportBottomZDistance => "support_bottom_z_distance",
            Self::SupportObjectXyDistance => "support_xy_distance",
            Self::RaftLayers => "raft_layers",
            Self::FirstLayerSpeed => "initial_layer_speed",
            Self::OuterWallSpeed => "outer_wall_speed",
            Self::InnerWallSpeed => "inner_wall_speed",
            Self::SparseInfillSpeed => "sparse_infill_speed",
            Self::SolidInfillSpeed => "solid_infill_speed",
            Self::TopSurfaceSpeed => "top_surface_speed",
            Self::SupportSpeed => "support_speed",
            Self::TravelSpeed => "travel_speed",
            Self::Acceleration => "default_acceleration",
            Self::MinPrintSpeed => "slow_down_min_speed",
            Self::BrimType => "brim_type",
            Self::ElephantFootCompensation => "elefant_foot_compensation",
            Self::SeamPosition => "seam_position",
            Self::SequentialPrinting => "sequential_print",
            Self::RetractionLength => "retraction_length",
            Self::RetractionSpeed => "retraction_speed",
            Self::ZHopWhenRetracted => "z_hop",
            Self::MaxVolumetricSpeed => "max_volumetric_speed",
            Self::FilamentType => "filament_type",
            Self::FilamentDiameter => "filament_diameter",
            Self::FlowRatio => "filament_flow_ratio",
            Self::PressureAdvance => "pressure_advance",
            Self::FilamentCost => "filament_cost",
            Self::FilamentDensity => "filament_density",
            Self::NozzleTemp => "nozzle_temperature",
            Self::FirstLayerNozzleTemp => "nozzle_temperature_initial_layer",
            Self::BedTemp => "bed_temperature",
            Self::FirstLayerBedTemp => "bed_temperature_initial_layer",
            Self::EnableFan => "fan_enable",
            Self::FanSpeed => "cooling_fan_speed",
            Self::KeepFanAlwaysOn => "fan_always_on",
            Self::SlowDownForCoolDown => "slow_down_for_layer_cooling",
            Self::NozzleDiameter
            | Self::BedShape
            | Self::PrintableAreaX
            | Self::PrintableAreaY
            | Self::OriginX
            | Self::OriginY => return None,
        };
        Some(key)
    }

    /// Constraint the key's value must satisfy before it is emitted.
    #[must_use]
    pub const fn kind(self) -> SettingKind {
        match self {
            Self::LayerHeight
            | Self::FirstLayerHeight
            | Self::LineWidth
            | Self::FirstLayerLineWidth
            | Self::TopShellThickness
            | Self::BottomShellThickness
            | Self::SupportTopZDistance
            | Self::SupportBottomZDistance
            | Self::SupportObjectXyDistance
            | Self::ElephantFootCompensation
            | Self::RetractionLength
            | Self::ZHopWhenRetracted
            | Self::FilamentDiameter
            | Self::NozzleDiameter
            | Self::PrintableAreaX
            | Self::PrintableAreaY => SettingKind::Measure("mm"),
            Self::MinimumInfillArea => SettingKind::Measure("mm²"),
            Self::FirstLayerSpeed
            | Self::OuterWallSpeed
            | Self::InnerWallSpeed
            | Self::SparseInfillSpeed
            | Self::SolidInfillSpeed
            | Self::TopSurfaceSpeed
            | Self::SupportSpeed
            | Self::TravelSpeed
            | Self::MinPrintSpeed
            | Self::RetractionSpeed => SettingKind::Measure("mm/s"),
            Self::Acceleration => SettingKind::Measure("mm/s²"),
            Self::MaxVolumetricSpeed => SettingKind::Measure("mm³/s"),
            Self::FlowRatio | Self::PressureAdvance => SettingKind::Measure("ratio"),
            Self::FilamentCost => SettingKind::Measure("per kg"),
            Self::FilamentDensity => SettingKind::Measure("g/cm³"),
            Self::NozzleTemp
            | Self::FirstLayerNozzleTemp
            | Self::BedTemp
            | Self::FirstLayerBedTemp => SettingKind::Measure("°C"),
            Self::OriginX | Self::OriginY => SettingKind::Offset("mm"),
            Self::WallLoops
            | Self::TopShellLayers
            | Self::BottomShellLayers
            | Self::RaftLayers => SettingKind::Count,
            Self::InfillDensity | Self::InfillWallOverlap | Self::FanSpeed => SettingKind::Percent,
            Self::InfillDirection | Self::SupportOverhangAngle => SettingKind::Angle,
            Self::VariableLayerHeight
            | Self::EnsureVerticalShellThickness
            | Self::EnableSupports
            | Self::SupportOnBuildPlateOnly
            | Self::SequentialPrinting
            | Self::EnableFan
            | Self::KeepFanAlwaysOn
            | Self::SlowDownForCoolDown => SettingKind::Toggle,
            Self::FuzzySkin => SettingKind::Choice(FUZZY_SKIN_MODES),
            Self::InfillPattern => SettingKind::Choice(INFILL_PATTERNS),
            Self::SupportType => SettingKind::Choice(SUPPORT_TYPES),
            Self::BrimType => SettingKind::Choice(BRIM_TYPES),
            Self::SeamPosition => SettingKind::Choice(SEAM_POSITIONS),
            Self::FilamentType => SettingKind::Choice(FILAMENT_TYPES),
            Self::BedShape => SettingKind::Choice(BED_SHAPES),
        }
    }

    /// Settings-panel section.
    #[must_use]
    pub const fn group(self) -> SettingGroup {
        match self {
            Self::LayerHeight
            | Self::FirstLayerHeight
            | Self::LineWidth
            | Self::FirstLayerLineWidth
            | Self::VariableLayerHeight => SettingGroup::Quality,
            Self::WallLoops
            | Self::TopShellLayers
            | Self::TopShellThickness
            | Self::BottomShellLayers
            | Self::BottomShellThickness
            | Self::EnsureVerticalShellThickness
            | Self::FuzzySkin => SettingGroup::Walls,
            Self::InfillDensity
            | Self::InfillPattern
            | Self::InfillDirection
            | Self::InfillWallOverlap
            | Self::MinimumInfillArea => SettingGroup::Infill,
            Self::EnableSupports
            | Self::SupportType
            | Self::SupportOnBuildPlateOnly
            | Self::SupportOverhangAngle
            | Self::SupportTopZDistance
            | Self::SupportBottomZDistance
            | Self::SupportObjectXyDistance
            | Self::RaftLayers => SettingGroup::Supports,
            Self::FirstLayerSpeed
            | Self::OuterWallSpeed
            | Self::InnerWallSpeed
            | Self::SparseInfillSpeed
            | Self::SolidInfillSpeed
            | Self::TopSurfaceSpeed
            | Self::SupportSpeed
            | Self::TravelSpeed
            | Self::Acceleration
            | Self::MinPrintSpeed => SettingGroup::Speed,
            Self::BrimType | Self::ElephantFootCompensation => SettingGroup::BedAdhesion,
            Self::SeamPosition
            | Self::SequentialPrinting
            | Self::RetractionLength
            | Self::RetractionSpeed
            | Self::ZHopWhenRetracted
            | Self::MaxVolumetricSpeed => SettingGroup::Advanced,
            Self::FilamentType
            | Self::FilamentDiameter
            | Self::FlowRatio
            | Self::PressureAdvance
            | Self::FilamentCost
            | Self::FilamentDensity
            | Self::NozzleTemp
            | Self::FirstLayerNozzleTemp
            | Self::BedTemp
            | Self::FirstLayerBedTemp => SettingGroup::Filament,
            Self::EnableFan
            | Self::FanSpeed
            | Self::KeepFanAlwaysOn
            | Self::SlowDownForCoolDown => SettingGroup::Cooling,
            Self::NozzleDiameter
            | Self::BedShape
            | Self::PrintableAreaX
            | Self::PrintableAreaY
            | Self::OriginX
            | Self::OriginY => SettingGroup::Printer,
        }
    }

    /// Whether enumerated values are lowercased on output.
    #[must_use]
    pub const fn lowercases_value(self) -> bool {
        matches!(
            self,
            Self::SupportType
                | Self::InfillPattern
                | Self::FuzzySkin
                | Self::BrimType
                | Self::SeamPosition
        )
    }

    /// Whether the value is written with a trailing `%`.
    #[must_use]
    pub const fn has_percent_suffix(self) -> bool {
        matches!(self, Self::InfillDensity)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_round_trip() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn all_has_no_duplicates() {
        let unique: HashSet<_> = SettingKey::ALL.into_iter().collect();
        assert_eq!(unique.len(), SettingKey::ALL.len());
    }

    #[test]
    fn external_keys_are_unique() {
        let mapped: Vec<_> = SettingKey::ALL
            .into_iter()
            .filter_map(SettingKey::external_key)
            .collect();
        let unique: HashSet<_> = mapped.iter().collect();
        assert_eq!(unique.len(), mapped.len());
        assert_eq!(mapped.len(), 57);
    }

    #[test]
    fn printer_context_is_unmapped() {
        for key in SettingKey::ALL {
            assert_eq!(
                key.external_key().is_none(),
                key.group() == SettingGroup::Printer,
                "{key}"
            );
        }
    }

    #[test]
    fn canonical_table_entries() {
        assert_eq!(SettingKey::LayerHeight.external_key(), Some("layer_height"));
        assert_eq!(
            SettingKey::InfillDensity.external_key(),
            Some("sparse_infill_density")
        );
        assert_eq!(SettingKey::EnableSupports.external_key(), Some("support_enable"));
        assert_eq!(
            SettingKey::ElephantFootCompensation.external_key(),
            Some("elefant_foot_compensation")
        );
    }

    #[test]
    fn formatting_flags() {
        let lowercased: Vec<_> = SettingKey::ALL
            .into_iter()
            .filter(|k| k.lowercases_value())
            .collect();
        assert_eq!(lowercased.len(), 5);
        assert!(lowercased
            .iter()
            .all(|k| matches!(k.kind(), SettingKind::Choice(_))));
        assert!(!SettingKey::FilamentType.lowercases_value());

        let percent: Vec<_> = SettingKey::ALL
            .into_iter()
            .filter(|k| k.has_percent_suffix())
            .collect();
        assert_eq!(percent, vec![SettingKey::InfillDensity]);
    }

    #[test]
    fn kind_descriptions() {
        assert!(SettingKind::Choice(SUPPORT_TYPES)
            .describe()
            .contains("Normal, Tree"));
        assert_eq!(SettingKind::Measure("mm").unit(), Some("mm"));
        assert_eq!(SettingKind::Toggle.unit(), None);
    }
}
