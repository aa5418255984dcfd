//! English display names from `en.xml`.

use std::{collections::HashMap, path::Path};

use log::info;
use roxmltree::Node;

use crate::{
    error::{Error, Result},
    locale::normalize,
    xml::{children, find, with_document},
};

/// Languages that appear in territory data but have no English name in
/// CLDR.
pub const SUPPLEMENTAL_LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("abr", "Abron"),
    ("abq", "Abaza"),
    ("aii", "Assyrian Neo-Aramaic"),
    ("akz", "Alabama"),
    ("amo", "Amo"),
    ("aoz", "Uab Meto"),
    ("atj", "Atikamekw"),
    ("bap", "Bantawa"),
    ("bci", "Baoulé"),
    ("bft", "Balti"),
    ("bfy", "Bagheli"),
    ("bgc", "Haryanvi"),
    ("bgx", "Balkan Gagauz Turkish"),
    ("bhb", "Bhili"),
    ("bhi", "Bhilali"),
    ("bhk", "Albay Bikol"),
    ("bjj", "Kanauji"),
    ("bku", "Buhid"),
    ("blt", "Tai Dam"),
    ("bmq", "Bomu"),
    ("bqi", "Bakhtiari"),
    ("bqv", "Koro Wachi"),
    ("bsq", "Bassa"),
    ("bto", "Rinconada Bikol"),
    ("btv", "Bateri"),
    ("buc", "Bushi"),
    ("bvb", "Bube"),
    ("bya", "Batak"),
    ("bze", "Jenaama Bozo"),
    ("bzx", "Kelengaxo Bozo"),
    ("ccp", "Chakma"),
    ("cja", "Western Cham"),
    ("cjs", "Shor"),
    ("cjm", "Eastern Cham"),
    ("ckt", "Chukchi"),
    ("crj", "Southern East Cree"),
    ("crk", "Plains Cree"),
    ("crl", "Northern East Cree"),
    ("crm", "Moose Cree"),
    ("crs", "Seselwa Creole French"),
    ("csw", "Swampy Cree"),
    ("ctd", "Tedim Chin"),
    ("dcc", "Deccan"),
    ("dng", "Dungan"),
    ("dnj", "Dan"),
    ("dtm", "Tomo Kan Dogon"),
    ("eky", "Eastern Kayah"),
    ("ett", "Etruscan"),
    ("evn", "Evenki"),
    ("ffm", "Maasina Fulfulde"),
    ("fud", "East Futuna"),
    ("fuq", "Central-Eastern Niger Fulfulde"),
    ("fuv", "Nigerian Fulfulde"),
    ("gbm", "Garhwali"),
    ("gcr", "Guianese Creole French"),
    ("ggn", "Eastern Gurung"),
    ("gjk", "Kachi Koli"),
    ("gju", "Gujari"),
    ("gld", "Nanai"),
    ("gos", "Gronings"),
    ("grt", "Garo"),
    ("gub", "Guajajára"),
    ("gvr", "Western Gurung"),
    ("haz", "Hazaragi"),
    ("hmd", "A-Hmao"),
    ("hnd", "Southern Hindko"),
    ("hne", "Chhattisgarhi"),
    ("hnj", "Hmong Njua"),
    ("hnn", "Hanunoo"),
    ("hno", "Northern Hindko"),
    ("hoc", "Ho"),
    ("hoj", "Haroti"),
    ("hop", "Hopi"),
    ("ikt", "Inuinnaqtun"),
    ("jml", "Jumli"),
    ("kao", "Xaasongaxango"),
    ("kca", "Khanty"),
    ("kck", "Kalanga"),
    ("kdt", "Kuy"),
    ("kfr", "Kachchi"),
    ("kfy", "Kumaoni"),
    ("kge", "Komering"),
    ("khb", "Lü"),
    ("khn", "Khandesi"),
    ("kht", "Khamti"),
    ("kjg", "Khmu"),
    ("kjh", "Khakas"),
    ("kpy", "Koryak"),
    ("kvr", "Kerinci"),
    ("kvx", "Parkari Koli"),
    ("kxm", "Northern Khmer"),
    ("kxp", "Wadiyara Koli"),
    ("laj", "Lango"),
    ("lbe", "Lak"),
    ("lbw", "Tolaki"),
    ("lcp", "Western Lawa"),
    ("lep", "Lepcha"),
    ("lif", "Limbu"),
    ("lis", "Lisu"),
    ("ljp", "Lampung Api"),
    ("lki", "Laki"),
    ("lmn", "Lambadi"),
    ("lrc", "Northern Luri"),
    ("luz", "Southern Luri"),
    ("lwl", "Eastern Lawa"),
    ("maz", "Central Mazahua"),
    ("mdh", "Maguindanaon"),
    ("mfa", "Pattani Malay"),
    ("mgp", "Eastern Magar"),
    ("mgy", "Mbunga"),
    ("mnw", "Mon"),
    ("moe", "Montagnais"),
    ("mrd", "Western Magar"),
    ("mtr", "Mewari"),
    ("mvy", "Indus Kohistani"),
    ("mwk", "Kita Maninkakan"),
    ("mxc", "Manyika"),
    ("myx", "Masaaba"),
    ("nch", "Central Huasteca Nahuatl"),
    ("ndc", "Ndau"),
    ("ngl", "Lomwe"),
    ("nhe", "Eastern Huasteca Nahuatl"),
    ("nhw", "Western Huasteca Nahuatl"),
    ("nij", "Ngaju"),
    ("nod", "Northern Thai"),
    ("noe", "Nimadi"),
    ("nsk", "Naskapi"),
    ("nxq", "Naxi"),
    ("pcm", "Nigerian Pidgin"),
    ("pko", "Pökoot"),
    ("prd", "Parsi-Dari"),
    ("puu", "Punu"),
    ("rcf", "Réunion Creole French"),
    ("rej", "Rejang"),
    ("ria", "Riang"),
    ("rjs", "Rajbanshi"),
    ("rkt", "Rangpuri"),
    ("rmf", "Kalo Finnish Romani"),
    ("rmo", "Sinte Romani"),
    ("rmt", "Domari"),
    ("rmu", "Tavringer Romani"),
    ("rng", "Ronga"),
    ("rob", "Tae’"),
    ("ryu", "Central Okinawan"),
    ("saf", "Safaliba"),
    ("sck", "Sadri"),
    ("scs", "North Slavey"),
    ("sdh", "Southern Kurdish"),
    ("sef", "Cebaara Senoufo"),
    ("skr", "Seraiki"),
    ("sou", "Southern Thai"),
    ("srx", "Sirmauri"),
    ("swv", "Shekhawati"),
    ("sxn", "Sangir"),
    ("syl", "Sylheti"),
    ("taj", "Eastern Tamang"),
    ("tbw", "Tagbanwa"),
    ("tdd", "Tai Nüa"),
    ("tdg", "Western Tamang"),
    ("tdh", "Thulung"),
    ("thl", "Dangaura Tharu"),
    ("thq", "Kochila Tharu"),
    ("thr", "Rana Tharu"),
    ("tkt", "Kathoriya Tharu"),
    ("tsf", "Southwestern Tamang"),
    ("tsg", "Tausug"),
    ("tsj", "Tshangla"),
    ("ttj", "Tooro"),
    ("tts", "Northeastern Thai"),
    ("uli", "Ulithian"),
    ("unr", "Mundari"),
    ("unx", "Munda"),
    ("vic", "Virgin Islands Creole English"),
    ("vmw", "Makhu"),
    ("wbr", "Wagdi"),
    ("wbq", "Waddar"),
    ("wls", "Wallisian"),
    ("wtm", "Mewati"),
    ("xav", "Xavánte"),
    ("xnr", "Kangri"),
    ("xsr", "Sherpa"),
    ("yua", "Yucatec Maya"),
    ("zdj", "Ngazidja Comorian"),
    ("zmi", "Negeri Sembilan Malay"),
];

/// English names for languages, scripts and territories.
#[derive(Debug, Clone, Default)]
pub struct EnglishNames {
    languages: HashMap<String, String>,
    scripts: HashMap<String, String>,
    territories: HashMap<String, String>,
}

/// Collect `type` → text for the children of a display-name group,
/// skipping `alt` variants.
fn name_table(group: Node) -> HashMap<String, String> {
    group
        .children()
        .filter(|child| child.is_element() && child.attribute("alt").is_none())
        .filter_map(|child| Some((normalize(child.attribute("type")?), child.text()?.to_string())))
        .collect()
}

impl EnglishNames {
    /// Load from CLDR `common/main/en.xml`.
    pub fn load(path: &Path) -> Result<Self> {
        let mut names = with_document(path, |doc| {
            let display_names = children(doc.root_element(), "localeDisplayNames")
                .next()
                .ok_or_else(|| Error::MissingElement {
                    path: path.to_path_buf(),
                    element: "localeDisplayNames",
                })?;
            let group = |element: &'static str| {
                find(display_names, element).map(name_table).ok_or_else(|| {
                    Error::MissingElement { path: path.to_path_buf(), element }
                })
            };
            Ok(Self {
                languages: group("languages")?,
                scripts: group("scripts")?,
                territories: group("territories")?,
            })
        })?;

        names.languages.extend(
            SUPPLEMENTAL_LANGUAGE_NAMES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string())),
        );
        Ok(names)
    }

    /// Build a table directly, mostly for tests and tooling.
    pub fn from_tables(
        languages: impl IntoIterator<Item = (String, String)>,
        scripts: impl IntoIterator<Item = (String, String)>,
        territories: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            languages: languages.into_iter().collect(),
            scripts: scripts.into_iter().collect(),
            territories: territories.into_iter().collect(),
        }
    }

    /// English name of `lang` or `lang-Script`.
    ///
    /// Falls back to "Language (Script script)" when CLDR has no name for
    /// the combination.
    pub fn language_name(&self, lang_scr: &str) -> Result<String> {
        if let Some(name) = self.languages.get(lang_scr) {
            return Ok(name.clone());
        }
        let missing = || Error::MissingName(lang_scr.to_string());
        let (lang, script) = lang_scr.split_once('-').ok_or_else(missing)?;
        let lang_name = self.languages.get(lang).ok_or_else(missing)?;
        let script_name = self.scripts.get(script).ok_or_else(missing)?;
        info!("Constructing a name for {lang_scr}");
        Ok(format!("{lang_name} ({script_name} script)"))
    }

    pub fn script_name(&self, script: &str) -> Result<&str> {
        self.scripts
            .get(script)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingName(script.to_string()))
    }

    pub fn territory_name(&self, territory: &str) -> Result<&str> {
        self.territories
            .get(territory)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingName(territory.to_string()))
    }
}
