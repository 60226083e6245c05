//! 치수 계산 서비스가 돌려주는 영문 설명을 견적서용 불어 표기로 바꾼다.

use std::sync::LazyLock;

use regex::Regex;

const DICTIONARY: &[(&str, &str)] = &[
    ("circuit breaker", "disjoncteur"),
    ("SimpleSocket", "prise simple"),
    ("DoubleSocket", "prise double"),
    ("WaterproofSocket", "prise étanche"),
    ("NetworkSocket", "prise RJ45"),
    ("TVSocket", "prise TV"),
    ("OvenSocket", "prise four"),
    ("ExtractorSocket", "prise hotte"),
    ("Dedicated20ASocket", "prise dédiée 20A"),
    ("LightingPoint", "point lumineux"),
    ("SimpleSwitch", "interrupteur simple"),
    ("DoubleSwitch", "interrupteur double"),
    ("DimmerSwitch", "va-et-vient"),
    ("InertiaRadiator", "radiateur inertie"),
    ("Convector", "convecteur"),
    ("AirConditioning", "climatisation"),
    ("FloorHeating", "plancher chauffant"),
    ("DuctedHeatPump", "pompe à chaleur gainée"),
    ("WaterHeater", "chauffe-eau"),
];

static PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    DICTIONARY
        .iter()
        .map(|&(en, fr)| {
            let pattern = format!(r"\b{}\b", regex::escape(en));
            (Regex::new(&pattern).expect("escaped dictionary term"), fr)
        })
        .collect()
});

/// 단어 경계 기준으로 사전에 있는 영문 용어를 불어로 치환한다.
pub fn translate_description(src: &str) -> String {
    PATTERNS
        .iter()
        .fold(src.to_string(), |acc, (re, fr)| {
            re.replace_all(&acc, *fr).into_owned()
        })
}
