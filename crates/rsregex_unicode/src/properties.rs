//! Unicode property lookup for `\p{...}` and `\P{...}`.
//!
//! Names are matched exactly as ECMAScript spells them (case and
//! underscores included), then translated through `regex_syntax`, which
//! carries the Unicode character data. Built sets are memoized.

use crate::class::{from_hir, SURROGATES};
use parking_lot::RwLock;
use regex_syntax::ParserBuilder;
use rsregex_core::CodePointSet;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("unknown Unicode property name '{0}'")]
    UnknownName(String),
    #[error("unknown value '{value}' for Unicode property '{name}'")]
    UnknownValue { name: String, value: String },
}

/// Binary property names and aliases.
const BINARY_PROPERTIES: &[&str] = &[
    "ASCII", "ASCII_Hex_Digit", "AHex", "Alphabetic", "Alpha", "Any", "Assigned", "Bidi_Control",
    "Bidi_C", "Bidi_Mirrored", "Bidi_M", "Case_Ignorable", "CI", "Cased", "Changes_When_Casefolded",
    "CWCF", "Changes_When_Casemapped", "CWCM", "Changes_When_Lowercased", "CWL",
    "Changes_When_NFKC_Casefolded", "CWKCF", "Changes_When_Titlecased", "CWT",
    "Changes_When_Uppercased", "CWU", "Dash", "Default_Ignorable_Code_Point", "DI", "Deprecated",
    "Dep", "Diacritic", "Dia", "Emoji", "Emoji_Component", "EComp", "Emoji_Modifier", "EMod",
    "Emoji_Modifier_Base", "EBase", "Emoji_Presentation", "EPres", "Extended_Pictographic",
    "ExtPict", "Extender", "Ext", "Grapheme_Base", "Gr_Base", "Grapheme_Extend", "Gr_Ext",
    "Hex_Digit", "Hex", "IDS_Binary_Operator", "IDSB", "IDS_Trinary_Operator", "IDST",
    "ID_Continue", "IDC", "ID_Start", "IDS", "Ideographic", "Ideo", "Join_Control", "Join_C",
    "Logical_Order_Exception", "LOE", "Lowercase", "Lower", "Math", "Noncharacter_Code_Point",
    "NChar", "Pattern_Syntax", "Pat_Syn", "Pattern_White_Space", "Pat_WS", "Quotation_Mark",
    "QMark", "Radical", "Regional_Indicator", "RI", "Sentence_Terminal", "STerm", "Soft_Dotted",
    "SD", "Terminal_Punctuation", "Term", "Unified_Ideograph", "UIdeo", "Uppercase", "Upper",
    "Variation_Selector", "VS", "White_Space", "space", "XID_Continue", "XIDC", "XID_Start", "XIDS",
];

/// General_Category values and aliases.
const GENERAL_CATEGORY_VALUES: &[&str] = &[
    "Cased_Letter", "LC", "Close_Punctuation", "Pe", "Connector_Punctuation", "Pc", "Control", "Cc",
    "cntrl", "Currency_Symbol", "Sc", "Dash_Punctuation", "Pd", "Decimal_Number", "Nd", "digit",
    "Enclosing_Mark", "Me", "Final_Punctuation", "Pf", "Format", "Cf", "Initial_Punctuation", "Pi",
    "Letter", "L", "Letter_Number", "Nl", "Line_Separator", "Zl", "Lowercase_Letter", "Ll", "Mark",
    "M", "Combining_Mark", "Math_Symbol", "Sm", "Modifier_Letter", "Lm", "Modifier_Symbol", "Sk",
    "Nonspacing_Mark", "Mn", "Number", "N", "Open_Punctuation", "Ps", "Other", "C", "Other_Letter",
    "Lo", "Other_Number", "No", "Other_Punctuation", "Po", "Other_Symbol", "So",
    "Paragraph_Separator", "Zp", "Private_Use", "Co", "Punctuation", "P", "punct", "Separator", "Z",
    "Space_Separator", "Zs", "Spacing_Mark", "Mc", "Surrogate", "Cs", "Symbol", "S",
    "Titlecase_Letter", "Lt", "Unassigned", "Cn", "Uppercase_Letter", "Lu",
];

/// Script and Script_Extensions values and aliases.
const SCRIPT_VALUES: &[&str] = &[
    "Adlam", "Adlm", "Ahom", "Anatolian_Hieroglyphs", "Hluw", "Arabic", "Arab", "Armenian", "Armn",
    "Avestan", "Avst", "Balinese", "Bali", "Bamum", "Bamu", "Bassa_Vah", "Bass", "Batak", "Batk",
    "Bengali", "Beng", "Bhaiksuki", "Bhks", "Bopomofo", "Bopo", "Brahmi", "Brah", "Braille", "Brai",
    "Buginese", "Bugi", "Buhid", "Buhd", "Canadian_Aboriginal", "Cans", "Carian", "Cari",
    "Caucasian_Albanian", "Aghb", "Chakma", "Cakm", "Cham", "Cherokee", "Cher", "Chorasmian",
    "Chrs", "Common", "Zyyy", "Coptic", "Copt", "Qaac", "Cuneiform", "Xsux", "Cypriot", "Cprt",
    "Cypro_Minoan", "Cpmn", "Cyrillic", "Cyrl", "Deseret", "Dsrt", "Devanagari", "Deva",
    "Dives_Akuru", "Diak", "Dogra", "Dogr", "Duployan", "Dupl", "Egyptian_Hieroglyphs", "Egyp",
    "Elbasan", "Elba", "Elymaic", "Elym", "Ethiopic", "Ethi", "Georgian", "Geor", "Glagolitic",
    "Glag", "Gothic", "Goth", "Grantha", "Gran", "Greek", "Grek", "Gujarati", "Gujr",
    "Gunjala_Gondi", "Gong", "Gurmukhi", "Guru", "Han", "Hani", "Hangul", "Hang", "Hanifi_Rohingya",
    "Rohg", "Hanunoo", "Hano", "Hatran", "Hatr", "Hebrew", "Hebr", "Hiragana", "Hira",
    "Imperial_Aramaic", "Armi", "Inherited", "Zinh", "Qaai", "Inscriptional_Pahlavi", "Phli",
    "Inscriptional_Parthian", "Prti", "Javanese", "Java", "Kaithi", "Kthi", "Kannada", "Knda",
    "Katakana", "Kana", "Kawi", "Kayah_Li", "Kali", "Kharoshthi", "Khar", "Khitan_Small_Script",
    "Kits", "Khmer", "Khmr", "Khojki", "Khoj", "Khudawadi", "Sind", "Lao", "Laoo", "Latin", "Latn",
    "Lepcha", "Lepc", "Limbu", "Limb", "Linear_A", "Lina", "Linear_B", "Linb", "Lisu", "Lycian",
    "Lyci", "Lydian", "Lydi", "Mahajani", "Mahj", "Makasar", "Maka", "Malayalam", "Mlym", "Mandaic",
    "Mand", "Manichaean", "Mani", "Marchen", "Marc", "Masaram_Gondi", "Gonm", "Medefaidrin", "Medf",
    "Meetei_Mayek", "Mtei", "Mende_Kikakui", "Mend", "Meroitic_Cursive", "Merc",
    "Meroitic_Hieroglyphs", "Mero", "Miao", "Plrd", "Modi", "Mongolian", "Mong", "Mro", "Mroo",
    "Multani", "Mult", "Myanmar", "Mymr", "Nabataean", "Nbat", "Nag_Mundari", "Nagm", "Nandinagari",
    "Nand", "New_Tai_Lue", "Talu", "Newa", "Nko", "Nkoo", "Nushu", "Nshu", "Nyiakeng_Puachue_Hmong",
    "Hmnp", "Ogham", "Ogam", "Ol_Chiki", "Olck", "Old_Hungarian", "Hung", "Old_Italic", "Ital",
    "Old_North_Arabian", "Narb", "Old_Permic", "Perm", "Old_Persian", "Xpeo", "Old_Sogdian", "Sogo",
    "Old_South_Arabian", "Sarb", "Old_Turkic", "Orkh", "Old_Uyghur", "Ougr", "Oriya", "Orya",
    "Osage", "Osge", "Osmanya", "Osma", "Pahawh_Hmong", "Hmng", "Palmyrene", "Palm", "Pau_Cin_Hau",
    "Pauc", "Phags_Pa", "Phag", "Phoenician", "Phnx", "Psalter_Pahlavi", "Phlp", "Rejang", "Rjng",
    "Runic", "Runr", "Samaritan", "Samr", "Saurashtra", "Saur", "Sharada", "Shrd", "Shavian",
    "Shaw", "Siddham", "Sidd", "SignWriting", "Sgnw", "Sinhala", "Sinh", "Sogdian", "Sogd",
    "Sora_Sompeng", "Sora", "Soyombo", "Soyo", "Sundanese", "Sund", "Syloti_Nagri", "Sylo",
    "Syriac", "Syrc", "Tagalog", "Tglg", "Tagbanwa", "Tagb", "Tai_Le", "Tale", "Tai_Tham", "Lana",
    "Tai_Viet", "Tavt", "Takri", "Takr", "Tamil", "Taml", "Tangsa", "Tnsa", "Tangut", "Tang",
    "Telugu", "Telu", "Thaana", "Thaa", "Thai", "Tibetan", "Tibt", "Tifinagh", "Tfng", "Tirhuta",
    "Tirh", "Toto", "Ugaritic", "Ugar", "Vai", "Vaii", "Vithkuqi", "Vith", "Wancho", "Wcho",
    "Warang_Citi", "Wara", "Yezidi", "Yezi", "Yi", "Yiii", "Zanabazar_Square", "Zanb", "Unknown",
    "Zzzz",
];

const GENERAL_CATEGORY_KEYS: [&str; 2] = ["General_Category", "gc"];
const SCRIPT_KEYS: [&str; 2] = ["Script", "sc"];
const SCRIPT_EXTENSIONS_KEYS: [&str; 2] = ["Script_Extensions", "scx"];

/// Names whose sets include the surrogate code points, which
/// `regex_syntax` cannot represent.
const WITH_SURROGATES: [&str; 4] = ["Any", "Assigned", "gc=Other", "gc=Surrogate"];

/// Check `name` against the ECMAScript tables and turn it into the
/// canonical query handed to `regex_syntax`.
fn resolve(name: &str) -> Result<String, PropertyError> {
    if let Some((key, value)) = name.split_once('=') {
        let (short_key, values) = if GENERAL_CATEGORY_KEYS.contains(&key) {
            ("gc", GENERAL_CATEGORY_VALUES)
        } else if SCRIPT_KEYS.contains(&key) {
            ("sc", SCRIPT_VALUES)
        } else if SCRIPT_EXTENSIONS_KEYS.contains(&key) {
            ("scx", SCRIPT_VALUES)
        } else {
            return Err(PropertyError::UnknownName(key.to_string()));
        };
        if !values.contains(&value) {
            return Err(PropertyError::UnknownValue {
                name: key.to_string(),
                value: value.to_string(),
            });
        }
        return Ok(format!("{}={}", short_key, canonical_value(short_key, value)));
    }
    if BINARY_PROPERTIES.contains(&name) {
        Ok(name.to_string())
    } else if GENERAL_CATEGORY_VALUES.contains(&name) {
        Ok(format!("gc={}", canonical_value("gc", name)))
    } else {
        Err(PropertyError::UnknownName(name.to_string()))
    }
}

/// Aliases of the categories that need surrogates patched in are spelled
/// out so the memo and the surrogate check see one name.
fn canonical_value<'a>(key: &str, value: &'a str) -> &'a str {
    match (key, value) {
        ("gc", "C") => "Other",
        ("gc", "Cs") => "Surrogate",
        _ => value,
    }
}

fn build(query: &str) -> Option<CodePointSet> {
    let mut set = if query == "gc=Surrogate" {
        CodePointSet::new()
    } else {
        let hir = ParserBuilder::new()
            .build()
            .parse(&format!("\\p{{{}}}", query))
            .ok()?;
        from_hir(&hir)?
    };
    if WITH_SURROGATES.contains(&query) {
        set.add_range(SURROGATES);
    }
    Some(set)
}

static CACHE: OnceLock<RwLock<FxHashMap<String, CodePointSet>>> = OnceLock::new();

/// Look up the code point set of a property name such as `Alphabetic`,
/// `Lu`, `gc=Cc` or `Script=Greek`.
pub fn get_property(name: &str) -> Result<CodePointSet, PropertyError> {
    let query = resolve(name)?;
    let cache = CACHE.get_or_init(|| RwLock::new(FxHashMap::default()));
    if let Some(set) = cache.read().get(&query) {
        return Ok(set.clone());
    }
    tracing::debug!(%query, name, "building property set");
    let set = build(&query).ok_or_else(|| match name.split_once('=') {
        Some((key, value)) => PropertyError::UnknownValue {
            name: key.to_string(),
            value: value.to_string(),
        },
        None => PropertyError::UnknownName(name.to_string()),
    })?;
    cache.write().insert(query, set.clone());
    Ok(set)
}
