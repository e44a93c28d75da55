use serde::Deserialize;

const LOW_TIER_LIMIT: f64 = 100_000.0;
const MID_TIER_LIMIT: f64 = 200_000.0;
const TILE_BACKGROUND_ALPHA: f32 = 0.15;

/// One profile entry. Its index in the loaded list is its only identity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RecordRow")]
pub struct Record {
    pub display_name: String,
    pub image_url: String,
    pub age: String,
    pub country: String,
    pub interest: String,
    pub net_worth_label: String,
}

// Rows arrive as `[name, imageUrl, age, country, interest, netWorth]`.
#[derive(Deserialize)]
struct RecordRow(String, String, AgeField, String, String, String);

#[derive(Deserialize)]
#[serde(untagged)]
enum AgeField {
    Number(serde_json::Number),
    Text(String),
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        let RecordRow(display_name, image_url, age, country, interest, net_worth_label) = row;

        let age = match age {
            AgeField::Number(number) => number.to_string(),
            AgeField::Text(text) => text,
        };

        Self {
            display_name,
            image_url,
            age,
            country,
            interest,
            net_worth_label,
        }
    }
}

impl Record {
    pub fn net_worth(&self) -> f64 {
        parse_net_worth(&self.net_worth_label)
    }

    pub fn tier(&self) -> NetWorthTier {
        NetWorthTier::from_value(self.net_worth())
    }

    pub fn card(&self) -> TileCard {
        TileCard {
            country_label: self.country.clone(),
            age_label: format!("AGE {}", self.age),
            name_label: self.display_name.clone(),
            interest_label: self.interest.clone(),
            image_url: self.image_url.clone(),
            style: TileStyle::for_tier(self.tier()),
        }
    }

    pub fn detail(&self) -> ProfileDetail {
        ProfileDetail {
            display_name: self.display_name.clone(),
            image_url: self.image_url.clone(),
            age: self.age.clone(),
            country: self.country.clone(),
            interest: self.interest.clone(),
            net_worth_label: self.net_worth_label.clone(),
            color: self.tier().color(),
        }
    }
}

/// Parses a currency label such as `"$250,000"` or `"$2.5e5"`. Anything
/// without a leading number counts as zero.
pub fn parse_net_worth(label: &str) -> f64 {
    let cleaned: String = label.chars().filter(|c| *c != '$' && *c != ',').collect();
    let cleaned = cleaned.trim_start();
    let bytes = cleaned.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        end += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return 0.0;
    }

    let mut number = cleaned[..end].trim_end_matches('.').to_string();

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_start = end + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let exponent_digits = digits_from(exponent_start);
        if exponent_digits > 0 {
            number.push_str(&cleaned[end..exponent_start + exponent_digits]);
        }
    }

    number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetWorthTier {
    Low,
    Mid,
    High,
}

impl NetWorthTier {
    pub fn from_value(net_worth: f64) -> Self {
        if net_worth < LOW_TIER_LIMIT {
            NetWorthTier::Low
        } else if net_worth <= MID_TIER_LIMIT {
            NetWorthTier::Mid
        } else {
            NetWorthTier::High
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            NetWorthTier::Low => Rgb::new(0xEF, 0x30, 0x22),
            NetWorthTier::Mid => Rgb::new(0xFD, 0xCA, 0x35),
            NetWorthTier::High => Rgb::new(0x3A, 0x9F, 0x48),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileStyle {
    pub tier: NetWorthTier,
    pub border: String,
    pub background: String,
}

impl TileStyle {
    pub fn for_tier(tier: NetWorthTier) -> Self {
        let color = tier.color();

        Self {
            tier,
            border: color.hex(),
            background: color.rgba(TILE_BACKGROUND_ALPHA),
        }
    }
}

/// Content shown on the face of a tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileCard {
    pub country_label: String,
    pub age_label: String,
    pub name_label: String,
    pub interest_label: String,
    pub image_url: String,
    pub style: TileStyle,
}

/// Content of the side panel for a selected tile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDetail {
    pub display_name: String,
    pub image_url: String,
    pub age: String,
    pub country: String,
    pub interest: String,
    pub net_worth_label: String,
    pub color: Rgb,
}
