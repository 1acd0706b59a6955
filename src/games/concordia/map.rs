//! Static map data: provinces, cities, tile zones, and the resource bag.
//!
//! Everything here is a compile-time constant. The multiset definitions are
//! part of the hash contract: reordering a city list or changing one zone
//! count silently invalidates every hash issued before the change, so edits
//! here must be followed by a `tabula-sweep` run and a data migration.

use serde::Serialize;

/// Resource tile kinds. Declaration order is the key order the permutation
/// index sorts by, which fixes which arrangement is index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Brick,
    Food,
    Tool,
    Wine,
    Cloth,
}

impl Resource {
    pub fn name(self) -> &'static str {
        match self {
            Resource::Brick => "brick",
            Resource::Food => "food",
            Resource::Tool => "tool",
            Resource::Wine => "wine",
            Resource::Cloth => "cloth",
        }
    }
}

/// Tile zones. Each province belongs to one zone; each zone is stocked from
/// its own tile multiset and hashed as its own group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Zone {
    A,
    B,
    C,
    D,
}

/// All zones, in hash-part order.
pub const ZONES: [Zone; 4] = [Zone::A, Zone::B, Zone::C, Zone::D];

/// Playable maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapId {
    Italia,
    Imperium,
}

impl MapId {
    /// Parse the lowercase map name used in URLs and stored setups.
    pub fn parse(name: &str) -> Option<MapId> {
        match name {
            "italia" => Some(MapId::Italia),
            "imperium" => Some(MapId::Imperium),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MapId::Italia => "italia",
            MapId::Imperium => "imperium",
        }
    }
}

/// A province: its tile zone and its cities, in board order. City order is
/// part of the hash contract — decoded permutations are zipped onto cities
/// in exactly this order.
pub struct Province {
    pub name: &'static str,
    pub zone: Zone,
    pub cities: &'static [&'static str],
}

const ITALIA: &[Province] = &[
    Province {
        name: "Venetia",
        zone: Zone::A,
        cities: &["Bavsanvm", "Aqvileia", "Verona"],
    },
    Province {
        name: "Transpadana",
        zone: Zone::A,
        cities: &["Comvm", "Segvsio"],
    },
    Province {
        name: "Liguria",
        zone: Zone::A,
        cities: &["Nicaea", "Genva"],
    },
    Province {
        name: "Aemilia",
        zone: Zone::B,
        cities: &["Mvtina", "Ravenna"],
    },
    Province {
        name: "Etruria",
        zone: Zone::B,
        cities: &["Florentia", "Cosa"],
    },
    Province {
        name: "Corsica",
        zone: Zone::B,
        cities: &["Aleria", "Olbia"],
    },
    Province {
        name: "Campania",
        zone: Zone::B,
        cities: &["Casinvm", "Neapolis"],
    },
    Province {
        name: "Umbria",
        zone: Zone::C,
        cities: &["Ancona", "Spoletvm", "Hadria"],
    },
    Province {
        name: "Apulia",
        zone: Zone::C,
        cities: &["Lvceria", "Brvndisivm"],
    },
    Province {
        name: "Lucania",
        zone: Zone::C,
        cities: &["Potentia", "Croton"],
    },
    Province {
        name: "Sicilia",
        zone: Zone::D,
        cities: &["Messana", "Syracvsae", "Panormvs"],
    },
    Province {
        name: "Sardinia",
        zone: Zone::D,
        cities: &["Caralis", "Nora"],
    },
];

const IMPERIUM: &[Province] = &[
    Province {
        name: "Britannia",
        zone: Zone::A,
        cities: &["Isca", "Londinivm"],
    },
    Province {
        name: "Germania",
        zone: Zone::A,
        cities: &["Colonia", "Vindobona"],
    },
    Province {
        name: "Gallia",
        zone: Zone::A,
        cities: &["Lvtetia", "Bvrdigala"],
    },
    Province {
        name: "Hispania",
        zone: Zone::B,
        cities: &["Olisipo", "Valentia", "Brigantivm"],
    },
    Province {
        name: "Mauretania",
        zone: Zone::B,
        cities: &["Tingis", "Rvsadir"],
    },
    Province {
        name: "Aegyptus",
        zone: Zone::C,
        cities: &["Alexandria", "Memphis"],
    },
    Province {
        name: "Arabia",
        zone: Zone::C,
        cities: &["Petra", "Damascvs"],
    },
    Province {
        name: "Asia",
        zone: Zone::C,
        cities: &["Byzantivm", "Sinope"],
    },
    Province {
        name: "Hellas",
        zone: Zone::D,
        cities: &["Athenae", "Sparta"],
    },
    Province {
        name: "Dacia",
        zone: Zone::D,
        cities: &["Tomis", "Sirmivm"],
    },
];

/// Provinces of a map, in board order.
pub fn provinces(map: MapId) -> &'static [Province] {
    match map {
        MapId::Italia => ITALIA,
        MapId::Imperium => IMPERIUM,
    }
}

/// Resource tiles a zone is stocked with. The total always equals the
/// zone's city count (asserted in the test suite).
pub fn zone_tiles(map: MapId, zone: Zone) -> &'static [(Resource, u32)] {
    use Resource::*;
    match (map, zone) {
        // Italia: 7 / 8 / 8 / 5 cities per zone.
        (MapId::Italia, Zone::A) => &[(Brick, 2), (Food, 2), (Tool, 1), (Wine, 1), (Cloth, 1)],
        (MapId::Italia, Zone::B) => &[(Brick, 2), (Food, 2), (Tool, 2), (Wine, 1), (Cloth, 1)],
        (MapId::Italia, Zone::C) => &[(Brick, 2), (Food, 2), (Tool, 1), (Wine, 2), (Cloth, 1)],
        (MapId::Italia, Zone::D) => &[(Brick, 1), (Food, 2), (Tool, 1), (Wine, 1)],
        // Imperium: 6 / 5 / 6 / 4 cities per zone.
        (MapId::Imperium, Zone::A) => &[(Brick, 2), (Food, 1), (Tool, 1), (Wine, 1), (Cloth, 1)],
        (MapId::Imperium, Zone::B) => &[(Brick, 1), (Food, 2), (Tool, 1), (Cloth, 1)],
        (MapId::Imperium, Zone::C) => &[(Brick, 1), (Food, 1), (Tool, 2), (Wine, 1), (Cloth, 1)],
        (MapId::Imperium, Zone::D) => &[(Food, 1), (Tool, 1), (Wine, 1), (Cloth, 1)],
    }
}

/// Cities of one zone, with their province, in board order. This is the
/// sequence a decoded zone permutation is zipped onto.
pub fn zone_cities(map: MapId, zone: Zone) -> Vec<(&'static str, &'static str)> {
    provinces(map)
        .iter()
        .filter(|p| p.zone == zone)
        .flat_map(|p| p.cities.iter().map(move |&city| (p.name, city)))
        .collect()
}

/// How many resource tiles of each kind ship in the box. Zone stocking
/// draws from this bag; what remains goes to the castle track (see
/// [`crate::games::concordia::castles`]).
pub const BAG: &[(Resource, u32)] = &[
    (Resource::Brick, 8),
    (Resource::Food, 9),
    (Resource::Tool, 7),
    (Resource::Wine, 6),
    (Resource::Cloth, 5),
];
