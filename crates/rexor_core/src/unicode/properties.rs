//! Versioned Unicode property tables for `\p{…}` / `\P{…}`.
//!
//! Property escapes joined the grammar in ES2018 and the admissible
//! names/values have grown with the Unicode release each later edition
//! pins. The tables below record, per edition, which keys and values the
//! validator accepts; swapping in a newer Unicode release means editing
//! only this module.
//!
//! Three queries are exposed:
//!
//! - [`is_valid_property`] — `Name=Value` form (`General_Category`,
//!   `Script`, `Script_Extensions` and their aliases).
//! - [`is_valid_lone_property`] — lone binary property names.
//! - [`is_valid_lone_property_of_strings`] — properties of strings,
//!   admissible only inside `v`-mode classes (ES2024).

use crate::parser::EcmaVersion;

// ─────────────────────────────────────────────────────────────────────────────
// General_Category values (stable since ES2018)
// ─────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
static GENERAL_CATEGORY_VALUES: &[&str] = &[
    "C", "Cased_Letter", "Cc", "Cf", "Close_Punctuation", "Cn", "Co",
    "Combining_Mark", "Connector_Punctuation", "Control", "Cs",
    "Currency_Symbol", "Dash_Punctuation", "Decimal_Number", "Enclosing_Mark",
    "Final_Punctuation", "Format", "Initial_Punctuation", "L", "LC", "Letter",
    "Letter_Number", "Line_Separator", "Ll", "Lm", "Lo", "Lowercase_Letter",
    "Lt", "Lu", "M", "Mark", "Math_Symbol", "Mc", "Me", "Mn",
    "Modifier_Letter", "Modifier_Symbol", "N", "Nd", "Nl", "No",
    "Nonspacing_Mark", "Number", "Open_Punctuation", "Other", "Other_Letter",
    "Other_Number", "Other_Punctuation", "Other_Symbol", "P",
    "Paragraph_Separator", "Pc", "Pd", "Pe", "Pf", "Pi", "Po", "Private_Use",
    "Ps", "Punctuation", "S", "Sc", "Separator", "Sk", "Sm", "So",
    "Space_Separator", "Spacing_Mark", "Surrogate", "Symbol",
    "Titlecase_Letter", "Unassigned", "Uppercase_Letter", "Z", "Zl", "Zp",
    "Zs",
];

// ─────────────────────────────────────────────────────────────────────────────
// Script / Script_Extensions values, by the edition that introduced them
// ─────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
static SCRIPT_VALUES_2018: &[&str] = &[
    "Adlam", "Ahom", "Anatolian_Hieroglyphs", "Arabic", "Armenian", "Avestan",
    "Balinese", "Bamum", "Bassa_Vah", "Batak", "Bengali", "Bhaiksuki",
    "Bopomofo", "Brahmi", "Braille", "Buginese", "Buhid", "Canadian_Aboriginal",
    "Carian", "Caucasian_Albanian", "Chakma", "Cham", "Cherokee", "Common",
    "Coptic", "Cuneiform", "Cypriot", "Cyrillic", "Deseret", "Devanagari",
    "Duployan", "Egyptian_Hieroglyphs", "Elbasan", "Ethiopic", "Georgian",
    "Glagolitic", "Gothic", "Grantha", "Greek", "Gujarati", "Gurmukhi", "Han",
    "Hangul", "Hanunoo", "Hatran", "Hebrew", "Hiragana", "Imperial_Aramaic",
    "Inherited", "Inscriptional_Pahlavi", "Inscriptional_Parthian", "Javanese",
    "Kaithi", "Kannada", "Katakana", "Kayah_Li", "Kharoshthi", "Khmer",
    "Khojki", "Khudawadi", "Lao", "Latin", "Lepcha", "Limbu", "Linear_A",
    "Linear_B", "Lisu", "Lycian", "Lydian", "Mahajani", "Malayalam",
    "Mandaic", "Manichaean", "Marchen", "Masaram_Gondi", "Meetei_Mayek",
    "Mende_Kikakui", "Meroitic_Cursive", "Meroitic_Hieroglyphs", "Miao",
    "Modi", "Mongolian", "Mro", "Multani", "Myanmar", "Nabataean", "New_Tai_Lue",
    "Newa", "Nko", "Nushu", "Ogham", "Ol_Chiki", "Old_Hungarian", "Old_Italic",
    "Old_North_Arabian", "Old_Permic", "Old_Persian", "Old_South_Arabian",
    "Old_Turkic", "Oriya", "Osage", "Osmanya", "Pahawh_Hmong", "Palmyrene",
    "Pau_Cin_Hau", "Phags_Pa", "Phoenician", "Psalter_Pahlavi", "Rejang",
    "Runic", "Samaritan", "Saurashtra", "Sharada", "Shavian", "Siddham",
    "SignWriting", "Sinhala", "Sora_Sompeng", "Soyombo", "Sundanese",
    "Syloti_Nagri", "Syriac", "Tagalog", "Tagbanwa", "Tai_Le", "Tai_Tham",
    "Tai_Viet", "Takri", "Tamil", "Tangut", "Telugu", "Thaana", "Thai",
    "Tibetan", "Tifinagh", "Tirhuta", "Ugaritic", "Vai", "Warang_Citi",
    "Yi", "Zanabazar_Square",
];

static SCRIPT_VALUES_2019: &[&str] = &[
    "Dogra",
    "Gunjala_Gondi",
    "Hanifi_Rohingya",
    "Makasar",
    "Medefaidrin",
    "Old_Sogdian",
    "Sogdian",
];

static SCRIPT_VALUES_2020: &[&str] = &[
    "Elymaic",
    "Nandinagari",
    "Nyiakeng_Puachue_Hmong",
    "Wancho",
];

static SCRIPT_VALUES_2021: &[&str] = &[
    "Chorasmian",
    "Dives_Akuru",
    "Khitan_Small_Script",
    "Yezidi",
];

static SCRIPT_VALUES_2022: &[&str] = &[
    "Cypro_Minoan",
    "Old_Uyghur",
    "Tangsa",
    "Toto",
    "Vithkuqi",
];

static SCRIPT_VALUES_2023: &[&str] = &["Kawi", "Nag_Mundari"];

static SCRIPT_VALUES_2025: &[&str] = &[
    "Garay",
    "Gurung_Khema",
    "Kirat_Rai",
    "Ol_Onal",
    "Sunuwar",
    "Todhri",
    "Tulu_Tigalari",
];

// ─────────────────────────────────────────────────────────────────────────────
// Lone binary properties, by the edition that introduced them
// ─────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
static BINARY_PROPERTIES_2018: &[&str] = &[
    "AHex", "ASCII", "ASCII_Hex_Digit", "Alpha", "Alphabetic", "Any",
    "Assigned", "Bidi_C", "Bidi_Control", "Bidi_M", "Bidi_Mirrored", "CI",
    "CWCF", "CWCM", "CWKCF", "CWL", "CWT", "CWU", "Case_Ignorable", "Cased",
    "Changes_When_Casefolded", "Changes_When_Casemapped",
    "Changes_When_Lowercased", "Changes_When_NFKC_Casefolded",
    "Changes_When_Titlecased", "Changes_When_Uppercased", "DI", "Dash",
    "Default_Ignorable_Code_Point", "Dep", "Deprecated", "Dia", "Diacritic",
    "Emoji", "Emoji_Component", "Emoji_Modifier", "Emoji_Modifier_Base",
    "Emoji_Presentation", "Ext", "Extender", "Gr_Base", "Gr_Ext",
    "Grapheme_Base", "Grapheme_Extend", "Hex", "Hex_Digit", "IDC", "IDS",
    "IDSB", "IDST", "IDS_Binary_Operator", "IDS_Trinary_Operator",
    "ID_Continue", "ID_Start", "Ideo", "Ideographic", "Join_C",
    "Join_Control", "LOE", "Logical_Order_Exception", "Lower", "Lowercase",
    "Math", "NChar", "Noncharacter_Code_Point", "Pat_Syn", "Pat_WS",
    "Pattern_Syntax", "Pattern_White_Space", "QMark", "Quotation_Mark", "RI",
    "Radical", "Regional_Indicator", "SD", "STerm", "Sentence_Terminal",
    "Soft_Dotted", "Term", "Terminal_Punctuation", "UIdeo",
    "Unified_Ideograph", "Upper", "Uppercase", "VS", "Variation_Selector",
    "White_Space", "WSpace", "XIDC", "XIDS", "XID_Continue", "XID_Start",
];

static BINARY_PROPERTIES_2019: &[&str] = &["Extended_Pictographic"];

static BINARY_PROPERTIES_2021: &[&str] = &["EBase", "EComp", "EMod", "EPres", "ExtPict"];

// ─────────────────────────────────────────────────────────────────────────────
// Properties of strings (ES2024, `v`-mode classes only)
// ─────────────────────────────────────────────────────────────────────────────

static STRING_PROPERTIES_2024: &[&str] = &[
    "Basic_Emoji",
    "Emoji_Keycap_Sequence",
    "RGI_Emoji",
    "RGI_Emoji_Flag_Sequence",
    "RGI_Emoji_Modifier_Sequence",
    "RGI_Emoji_Tag_Sequence",
    "RGI_Emoji_ZWJ_Sequence",
];

// ─────────────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────────────

/// Returns `true` for code points admissible in a *UnicodePropertyName*
/// (`[A-Za-z_]`).
pub fn is_property_name_character(cp: u32) -> bool {
    (0x41..=0x5A).contains(&cp) || (0x61..=0x7A).contains(&cp) || cp == 0x5F
}

/// Returns `true` for code points admissible in a *UnicodePropertyValue*
/// (`[A-Za-z0-9_]`).
pub fn is_property_value_character(cp: u32) -> bool {
    is_property_name_character(cp) || (0x30..=0x39).contains(&cp)
}

fn is_general_category_value(value: &str) -> bool {
    GENERAL_CATEGORY_VALUES.contains(&value)
}

fn is_script_value(version: EcmaVersion, value: &str) -> bool {
    SCRIPT_VALUES_2018.contains(&value)
        || (version >= EcmaVersion::Es2019 && SCRIPT_VALUES_2019.contains(&value))
        || (version >= EcmaVersion::Es2020 && SCRIPT_VALUES_2020.contains(&value))
        || (version >= EcmaVersion::Es2021 && SCRIPT_VALUES_2021.contains(&value))
        || (version >= EcmaVersion::Es2022 && SCRIPT_VALUES_2022.contains(&value))
        || (version >= EcmaVersion::Es2023 && SCRIPT_VALUES_2023.contains(&value))
        || (version >= EcmaVersion::Es2025 && SCRIPT_VALUES_2025.contains(&value))
}

/// Returns `true` when `name=value` is an admissible property expression
/// for `version`. Property escapes require ES2018 at all.
pub fn is_valid_property(version: EcmaVersion, name: &str, value: &str) -> bool {
    if version < EcmaVersion::Es2018 {
        return false;
    }
    match name {
        "General_Category" | "gc" => is_general_category_value(value),
        "Script" | "sc" | "Script_Extensions" | "scx" => is_script_value(version, value),
        _ => false,
    }
}

/// Returns `true` when `name_or_value` is an admissible lone property for
/// `version` — a binary property name, or a bare `General_Category` value
/// (handled by the caller via [`is_valid_property`]).
pub fn is_valid_lone_property(version: EcmaVersion, name_or_value: &str) -> bool {
    if version < EcmaVersion::Es2018 {
        return false;
    }
    BINARY_PROPERTIES_2018.contains(&name_or_value)
        || (version >= EcmaVersion::Es2019 && BINARY_PROPERTIES_2019.contains(&name_or_value))
        || (version >= EcmaVersion::Es2021 && BINARY_PROPERTIES_2021.contains(&name_or_value))
}

/// Returns `true` when `name` is an admissible property-of-strings for
/// `version` (ES2024 onward, `v`-mode classes only).
pub fn is_valid_lone_property_of_strings(version: EcmaVersion, name: &str) -> bool {
    version >= EcmaVersion::Es2024 && STRING_PROPERTIES_2024.contains(&name)
}
