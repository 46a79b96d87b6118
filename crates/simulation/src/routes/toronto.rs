//! Built-in schematic of the Toronto subway.
//!
//! Hand-authored: start points and relative segments in map units (x right,
//! y down), station distances measured along each line from its start.

use bevy::math::Vec2;

use super::registry::{RouteError, RouteRegistry};
use super::types::{Line, Station};

pub const BLOOR_DANFORTH: &str = "Bloor-Danforth";
pub const YONGE_UNIVERSITY: &str = "Yonge-University";
pub const SHEPPARD: &str = "Sheppard";

fn stations(entries: &[(f32, &str)]) -> Vec<Station> {
    entries
        .iter()
        .map(|&(distance, name)| Station {
            name: name.to_string(),
            distance,
        })
        .collect()
}

fn segments(entries: &[(f32, f32)]) -> Vec<Vec2> {
    entries.iter().map(|&(dx, dy)| Vec2::new(dx, dy)).collect()
}

pub fn bloor_danforth() -> Line {
    Line::new(
        BLOOR_DANFORTH,
        [0x00, 0xA8, 0x59],
        Vec2::new(250.0, 585.0),
        segments(&[
            (25.0, -12.0),
            (725.0, 0.0),
            (30.0, -16.0),
            (56.0, -70.0),
            (50.0, -50.0),
        ]),
        stations(&[
            (1.0, "Kipling"),
            (28.0, "Islington"),
            (54.0, "Royal York"),
            (82.0, "Old Mill"),
            (110.0, "Jane"),
            (138.0, "Runnymede"),
            (165.0, "High Park"),
            (193.0, "Keele"),
            (221.0, "Dundas West"),
            (249.0, "Lansdowne"),
            (276.0, "Dufferin"),
            (305.0, "Ossington"),
            (333.0, "Christie"),
            (360.0, "Bathurst"),
            (387.0, "Spadina"),
            (416.0, "St. George"),
            (443.0, "Bay"),
            (471.0, "Bloor-Yonge"),
            (499.0, "Sherbourne"),
            (527.0, "Castle Frank"),
            (555.0, "Broadview"),
            (583.0, "Chester"),
            (611.0, "Pape"),
            (639.0, "Donlands"),
            (667.0, "Greenwood"),
            (695.0, "Coxwell"),
            (723.0, "Woodbine"),
            (751.0, "Main Street"),
            (788.0, "Victoria Park"),
            (875.0, "Warden"),
            (1000.0, "Kennedy"),
        ]),
    )
}

pub fn yonge_university() -> Line {
    Line::new(
        YONGE_UNIVERSITY,
        [0xFF, 0xCC, 0x29],
        Vec2::new(718.0, 212.0),
        segments(&[
            (0.0, 530.0),
            (-54.0, 0.0),
            (0.0, -168.0),
            (-28.0, -28.0),
            (0.0, -61.0),
            (-55.0, -55.0),
            (-27.0, -108.0),
            (-28.0, -52.0),
            (-58.0, -29.0),
            (-110.0, -110.0),
            (0.0, -30.0),
        ]),
        stations(&[
            (1.0, "Finch"),
            (28.0, "North York Centre"),
            (54.0, "Sheppard-Yonge"),
            (110.0, "York Mills"),
            (167.0, "Lawrence"),
            (222.0, "Eglinton"),
            (250.0, "Davisville"),
            (278.0, "St. Clair"),
            (305.0, "Summerhill"),
            (333.0, "Rosedale"),
            (361.0, "Bloor-Yonge"),
            (389.0, "Wellesley"),
            (417.0, "College"),
            (445.0, "Dundas"),
            (472.0, "Queen"),
            (500.0, "King"),
            (557.0, "Union"),
            (614.0, "St. Andrew"),
            (643.0, "Osgoode"),
            (669.0, "St. Patrick"),
            (697.0, "Queen's Park"),
            (725.0, "Museum"),
            (753.0, "St. George"),
            (792.0, "Spadina"),
            (820.0, "Dupont"),
            (853.0, "St. Clair West"),
            (930.0, "Eglinton West"),
            (957.0, "Glencairn"),
            (985.0, "Lawrence West"),
            (1013.0, "Yorkdale"),
            (1041.0, "Wilson"),
            (1101.0, "Sheppard West"),
            (1167.0, "Downsview Park"),
            (1214.0, "Finch West"),
            (1252.0, "York University"),
            (1292.0, "Pioneer Village"),
            (1322.0, "Highway 407"),
            (1350.0, "Vaughan Metropolitan Centre"),
        ]),
    )
}

pub fn sheppard() -> Line {
    Line::new(
        SHEPPARD,
        [0xA8, 0x51, 0x8A],
        Vec2::new(717.0, 266.0),
        segments(&[(225.0, 0.0)]),
        stations(&[
            (1.0, "Sheppard-Yonge"),
            (83.0, "Bayview"),
            (125.0, "Bessarion"),
            (168.0, "Leslie"),
            (225.0, "Don Mills"),
        ]),
    )
}

impl RouteRegistry {
    /// The three built-in Toronto lines.
    pub fn toronto() -> Result<Self, RouteError> {
        Self::new(vec![bloor_danforth(), yonge_university(), sheppard()])
    }
}
