//! Static word pools the board generator draws from.
//!
//! The classic pool is the default; the themed pools back the category
//! option a host can pick when starting a mission.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pool to deal a board from.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    #[default]
    Classic,
    Technology,
    Nature,
    Mythology,
}

impl WordCategory {
    /// The words available under this category.
    #[must_use]
    pub const fn pool(self) -> &'static [&'static str] {
        match self {
            Self::Classic => CLASSIC,
            Self::Technology => TECHNOLOGY,
            Self::Nature => NATURE,
            Self::Mythology => MYTHOLOGY,
        }
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Classic => "classic",
            Self::Technology => "technology",
            Self::Nature => "nature",
            Self::Mythology => "mythology",
        };
        write!(f, "{repr}")
    }
}

const CLASSIC: &[&str] = &[
    "AFRICA", "AGENT", "AIR", "ALIEN", "AMAZON", "ANGEL", "APPLE", "ARM", "BACK", "BAND", "BANK",
    "BAR", "BARK", "BAT", "BATTERY", "BEACH", "BEAR", "BEAT", "BED", "BELL", "BELT", "BERLIN",
    "BERRY", "BILL", "BOARD", "BOMB", "BOND", "BOOM", "BOOT", "BOTTLE", "BOW", "BOX", "BRIDGE",
    "BRUSH", "BUCK", "BUFFALO", "BUG", "BUTTON", "CANADA", "CAPITAL", "CAR", "CARD", "CARROT",
    "CASINO", "CAST", "CAT", "CELL", "CENTAUR", "CENTER", "CHAIR", "CHANGE", "CHARGE", "CHECK",
    "CHEST", "CHICK", "CHINA", "CHOCOLATE", "CHURCH", "CIRCLE", "CLIFF", "CLOAK", "CLUB", "CODE",
    "COLD", "COMIC", "COMPOUND", "CONCERT", "CONTRACT", "COOK", "COPPER", "COTTON", "COURT",
    "COVER", "CRANE", "CRASH", "CRICKET", "CROSS", "CROWN", "CYCLE", "DANCE", "DATE", "DAY",
    "DEATH", "DECK", "DEGREE", "DIAMOND", "DICE", "DINOSAUR", "DISEASE", "DOCTOR", "DOG", "DRAFT",
    "DRAGON", "DRESS", "DRILL", "DROP", "DUCK", "DWARF", "EAGLE", "EGYPT", "EMBASSY", "ENGINE",
    "ENGLAND", "EUROPE", "EYE", "FACE", "FAIR", "FALL", "FAN", "FENCE", "FIELD", "FIGHTER",
    "FIGURE", "FILE", "FILM", "FIRE", "FISH", "FLUTE", "FLY", "FOOT", "FORCE", "FOREST", "FORK",
    "FRANCE", "GAME", "GAS", "GENIUS", "GERMANY", "GHOST", "GIANT", "GLASS", "GLOVE", "GOLD",
    "GRACE", "GRASS", "GREECE", "GREEN", "GROUND", "HAM", "HAND", "HAWK", "HEAD", "HEART",
    "HELICOPTER", "HIMALAYAS", "HOLE", "HOLLYWOOD", "HONEY", "HOOD", "HOOK", "HORN", "HORSE",
    "HORSESHOE", "HOSPITAL", "HOTEL", "ICE", "INDIA", "IRON", "IVORY", "JACK", "JAM", "JET",
    "JUPITER", "KANGAROO", "KETCHUP", "KEY", "KID", "KING", "KIWI", "KNIFE", "KNIGHT", "LAB",
    "LAP", "LASER", "LAWYER", "LEAD", "LEMON", "LIFE", "LIGHT", "LIMOUSINE", "LINE", "LINK",
    "LION", "LITTER", "LOCH_NESS", "LOCK", "LOG", "LONDON", "LUCK", "MAIL", "MAMMOTH", "MAPLE",
    "MARBLE", "MARCH", "MASS", "MATCH", "MERCURY", "MEXICO", "MICROSCOPE", "MILLIONAIRE", "MINE",
    "MINT", "MISSILE", "MODEL", "MOLE", "MOON", "MOSCOW", "MOUNT", "MOUSE", "MOUTH", "MUG",
    "NAIL", "NEEDLE", "NET", "NEW_YORK", "NIGHT", "NINJA", "NOTE", "NOVEL", "NURSE", "NUT",
    "OCTOPUS", "OIL", "OLIVE", "OLYMPUS", "OPERA", "ORANGE", "ORGAN", "PALM", "PAN", "PANTS",
    "PAPER", "PARACHUTE", "PARK", "PART", "PASS", "PASTE", "PENGUIN", "PHOENIX", "PIANO", "PIE",
    "PILOT", "PIN", "PIPE", "PIRATE", "PISTOL", "PIT", "PITCH", "PLANE", "PLASTIC", "PLATE",
    "PLATYPUS", "PLAY", "PLOT", "POINT", "POISON", "POLE", "POLICE", "POOL", "PORT", "POST",
    "POUND", "PRESS", "PRINCESS", "PUMPKIN", "PUPIL", "PYRAMID", "QUEEN", "RABBIT", "RACKET",
    "RAY", "REVOLUTION", "RING", "ROBIN", "ROBOT", "ROCK", "ROME", "ROOT", "ROSE", "ROULETTE",
    "ROUND", "ROW", "RULER", "SATELLITE", "SATURN", "SCALE", "SCHOOL", "SCIENTIST", "SCORPION",
    "SCREEN", "SCUBA_DIVER", "SEAL", "SERVER", "SHADOW", "SHAKESPEARE", "SHARK", "SHIP", "SHOE",
    "SHOP", "SHOT", "SINK", "SKYSCRAPER", "SLIP", "SLUG", "SMUGGLER", "SNOW", "SNOWMAN", "SOCK",
    "SOLDIER", "SOUL", "SOUND", "SPACE", "SPELL", "SPIDER", "SPIKE", "SPINE", "SPOT", "SPRING",
    "SPY", "SQUARE", "STADIUM", "STAFF", "STAR", "STATE", "STICK", "STOCK", "STRAW", "STREAM",
    "STRIKE", "STRING", "SUB", "SUIT", "SUPERHERO", "SWING", "SWITCH", "TABLE", "TABLET", "TAG",
    "TAIL", "TAP", "TEACHER", "TELESCOPE", "TEMPLE", "THEATER", "THIEF", "THUMB", "TICK", "TIE",
    "TIME", "TOKYO", "TOOTH", "TORCH", "TOWER", "TRACK", "TRAIN", "TRIANGLE", "TRIP", "TRUNK",
    "TUBE", "TURKEY", "UNDERTAKER", "UNICORN", "VACUUM", "VAN", "VET", "WAKE", "WALL", "WAR",
    "WASHER", "WASHINGTON", "WATCH", "WATER", "WAVE", "WEB", "WELL", "WHALE", "WHIP", "WIND",
    "WITCH", "WORM", "YARD",
];

const TECHNOLOGY: &[&str] = &[
    "ALGORITHM", "ARRAY", "BANDWIDTH", "BROWSER", "BUFFER", "CACHE", "CIRCUIT", "CLOUD",
    "COMPILER", "CURSOR", "DATABASE", "DEBUGGER", "DESKTOP", "DOMAIN", "EMAIL", "FIREWALL",
    "FIRMWARE", "GADGET", "HACKER", "KERNEL", "KEYBOARD", "LAPTOP", "MEMORY", "MODEM", "MONITOR",
    "NETWORK", "PIXEL", "PRINTER", "PROTOCOL", "ROUTER", "SANDBOX", "SCRIPT", "SENSOR", "SILICON",
    "SOFTWARE", "TERMINAL", "TOKEN", "UPLOAD", "VIRUS", "WIDGET",
];

const NATURE: &[&str] = &[
    "ACORN", "ASPEN", "BADGER", "BAMBOO", "BLOSSOM", "BOULDER", "BREEZE", "BROOK", "CANYON",
    "CEDAR", "CLOVER", "CORAL", "CYPRESS", "DELTA", "DESERT", "DEW", "FERN", "FJORD", "GEYSER",
    "GLACIER", "GROVE", "HEDGE", "IVY", "LAGOON", "LICHEN", "MEADOW", "MOSS", "OTTER", "PEBBLE",
    "PRAIRIE", "REEF", "RIVER", "SUMMIT", "THICKET", "TIDE", "TUNDRA", "VALLEY", "WILLOW",
];

const MYTHOLOGY: &[&str] = &[
    "AMBROSIA", "ANUBIS", "APOLLO", "ATLAS", "BANSHEE", "BASILISK", "CERBERUS", "CHIMERA",
    "CYCLOPS", "DRYAD", "FENRIR", "GORGON", "GRIFFIN", "HADES", "HERCULES", "HYDRA", "ICARUS",
    "KRAKEN", "LABYRINTH", "MEDUSA", "MERMAID", "MIDAS", "MINOTAUR", "NYMPH", "ODIN", "ORACLE",
    "PEGASUS", "POSEIDON", "SIREN", "SPHINX", "THOR", "TITAN", "TRITON", "VALHALLA", "VALKYRIE",
    "WYVERN", "ZEUS",
];
