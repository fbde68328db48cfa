//! Name → icon matching against the icon library.
//!
//! [`find_icon`] runs an ordered chain of increasingly fuzzy strategies and
//! returns the first hit. Every strategy asks the [`IconStore`] for a single
//! best candidate; the store ranks candidates by image presence first, then
//! by library-name length (longest first).

use serde::Serialize;

use crate::dashboard::ConfigDocument;

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

/// The parts of an icon library row the matcher cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    pub id: String,
    pub name: String,
    /// Symbolic reference such as `mdi:docker`.
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub color: Option<String>,
}

impl IconRecord {
    pub fn has_image(&self) -> bool {
        non_empty(&self.image_url)
    }

    /// Records with neither a symbol nor an image can never satisfy a match.
    pub fn has_artwork(&self) -> bool {
        self.has_image() || non_empty(&self.icon)
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Read-only lookups the matcher performs. Each returns the top-ranked
/// candidate only.
pub trait IconStore {
    /// Case-insensitive exact match on id or name.
    fn lookup(&self, term: &str) -> Option<&IconRecord>;

    /// Exact match after stripping spaces, hyphens and underscores from both
    /// sides.
    fn lookup_compact(&self, term: &str) -> Option<&IconRecord>;

    /// Id or name contains `term`, restricted to names of at least
    /// `min_name_len` characters.
    fn search_contains(&self, term: &str, min_name_len: usize) -> Option<&IconRecord>;
}

struct IndexedIcon {
    record: IconRecord,
    id_lower: String,
    name_lower: String,
    id_compact: String,
    name_compact: String,
    name_len: usize,
}

/// An in-memory, pre-ranked snapshot of the icon library.
pub struct IconLibrary {
    icons: Vec<IndexedIcon>,
}

impl IconLibrary {
    pub fn new(records: impl IntoIterator<Item = IconRecord>) -> Self {
        let mut icons: Vec<IndexedIcon> = records
            .into_iter()
            .filter(IconRecord::has_artwork)
            .map(|record| {
                let id_lower = record.id.to_lowercase();
                let name_lower = record.name.to_lowercase();
                IndexedIcon {
                    id_compact: compact(&id_lower),
                    name_compact: compact(&name_lower),
                    name_len: record.name.chars().count(),
                    id_lower,
                    name_lower,
                    record,
                }
            })
            .collect();

        icons.sort_by(|a, b| {
            b.record
                .has_image()
                .cmp(&a.record.has_image())
                .then(b.name_len.cmp(&a.name_len))
                .then_with(|| a.record.id.cmp(&b.record.id))
        });

        Self { icons }
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    fn first(&self, pred: impl Fn(&IndexedIcon) -> bool) -> Option<&IconRecord> {
        self.icons.iter().find(|i| pred(i)).map(|i| &i.record)
    }
}

impl IconStore for IconLibrary {
    fn lookup(&self, term: &str) -> Option<&IconRecord> {
        let term = term.to_lowercase();
        self.first(|i| i.id_lower == term || i.name_lower == term)
    }

    fn lookup_compact(&self, term: &str) -> Option<&IconRecord> {
        let term = compact(&term.to_lowercase());
        if term.is_empty() {
            return None;
        }
        self.first(|i| i.id_compact == term || i.name_compact == term)
    }

    fn search_contains(&self, term: &str, min_name_len: usize) -> Option<&IconRecord> {
        let term = term.to_lowercase();
        self.first(|i| {
            i.name_len >= min_name_len
                && (i.name_lower.contains(&term) || i.id_lower.contains(&term))
        })
    }
}

fn compact(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, ' ' | '-' | '_')).collect()
}

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

/// Sub-brand or alternative name → canonical library id, scanned in order.
/// Aliases match as substrings of the normalized query.
pub const BRAND_ALIASES: &[(&str, &str)] = &[
    // TP-Link
    ("deco", "tp-link"),
    ("tapo", "tp-link"),
    ("kasa", "tp-link"),
    ("omada", "tp-link"),
    ("archer", "tp-link"),
    ("tplink", "tp-link"),
    // Ubiquiti
    ("ubnt", "ubiquiti"),
    ("edgemax", "ubiquiti"),
    ("edgerouter", "ubiquiti"),
    ("amplifi", "ubiquiti"),
    // Netgear
    ("orbi", "netgear"),
    ("nighthawk", "netgear"),
    // Google
    ("nest", "google-home"),
    ("chromecast", "google-chrome"),
    // Amazon
    ("echo", "alexa"),
    ("ring", "amazon"),
    ("kindle", "amazon"),
    ("firetv", "amazon"),
    // Home Assistant
    ("hass", "home-assistant"),
    ("hassio", "home-assistant"),
    ("homeassistant", "home-assistant"),
    // ESPHome-based displays
    ("ulanzi", "esphome"),
    ("awtrix", "esphome"),
    ("pihole", "pi-hole"),
    ("adguard", "adguard-home"),
    // NAS
    ("dsm", "synology"),
    ("freenas", "truenas-core"),
    ("truenas", "truenas-scale"),
    ("xpenology", "synology"),
    // Virtualization
    ("pve", "proxmox"),
    ("esxi", "vmware-esxi"),
    ("vcenter", "vmware"),
    ("vsphere", "vmware"),
    // Orchestration
    ("k8s", "kubernetes"),
    ("kubectl", "kubernetes"),
    ("microk8s", "kubernetes"),
    ("swarm", "docker"),
    ("fortigate", "fortinet"),
    ("wg", "wireguard"),
    ("keepass", "keepassxc"),
    ("npm", "nginx-proxy-manager"),
    ("influx", "influxdb"),
    ("cloudflared", "cloudflare"),
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
];

/// Shortest library name the substring strategies will consider.
const MIN_CONTAINS_NAME_LEN: usize = 4;
/// Shortest token tried on its own as an exact match.
const MIN_WORD_LEN: usize = 3;
/// Shortest token tried as a substring.
const MIN_WORD_CONTAINS_LEN: usize = 4;

// ---------------------------------------------------------------------------
// Strategy chain
// ---------------------------------------------------------------------------

/// The strategy that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStep {
    Alias,
    Exact,
    Compact,
    Contains,
    Word,
    WordPair,
    WordContains,
}

/// A normalized query.
struct Query {
    normalized: String,
    words: Vec<String>,
}

impl Query {
    fn new(name: &str) -> Self {
        let normalized = name.trim().to_lowercase();
        let words = normalized
            .split([' ', '-', '_'])
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { normalized, words }
    }
}

type Strategy = for<'s> fn(&Query, &'s dyn IconStore) -> Option<&'s IconRecord>;

/// Strategies in priority order.
const STRATEGIES: &[(MatchStep, Strategy)] = &[
    (MatchStep::Alias, by_alias),
    (MatchStep::Exact, by_exact),
    (MatchStep::Compact, by_compact),
    (MatchStep::Contains, by_contains),
    (MatchStep::Word, by_word),
    (MatchStep::WordPair, by_word_pair),
    (MatchStep::WordContains, by_word_contains),
];

fn by_alias<'s>(q: &Query, store: &'s dyn IconStore) -> Option<&'s IconRecord> {
    BRAND_ALIASES
        .iter()
        .filter(|(alias, _)| q.normalized.contains(alias))
        .find_map(|(_, canonical)| store.lookup(canonical))
}

fn by_exact<'s>(q: &Query, store: &'s dyn IconStore) -> Option<&'s IconRecord> {
    store.lookup(&q.normalized)
}

fn by_compact<'s>(q: &Query, store: &'s dyn IconStore) -> Option<&'s IconRecord> {
    store.lookup_compact(&q.normalized)
}

fn by_contains<'s>(q: &Query, store: &'s dyn IconStore) -> Option<&'s IconRecord> {
    store.search_contains(&q.normalized, MIN_CONTAINS_NAME_LEN)
}

fn by_word<'s>(q: &Query, store: &'s dyn IconStore) -> Option<&'s IconRecord> {
    q.words
        .iter()
        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
        .find_map(|w| store.lookup(w))
}

fn by_word_pair<'s>(q: &Query, store: &'s dyn IconStore) -> Option<&'s IconRecord> {
    q.words.windows(2).find_map(|pair| {
        let hyphenated = format!("{}-{}", pair[0], pair[1]);
        let bare = format!("{}{}", pair[0], pair[1]);
        store
            .lookup(&hyphenated)
            .or_else(|| store.lookup(&bare))
            .or_else(|| store.lookup_compact(&bare))
    })
}

fn by_word_contains<'s>(q: &Query, store: &'s dyn IconStore) -> Option<&'s IconRecord> {
    q.words
        .iter()
        .filter(|w| w.chars().count() >= MIN_WORD_CONTAINS_LEN)
        .find_map(|w| store.search_contains(w, MIN_CONTAINS_NAME_LEN))
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Find the best icon for `name`, reporting which strategy hit.
///
/// A blank name never matches.
pub fn find_icon<'s>(name: &str, store: &'s dyn IconStore) -> Option<(MatchStep, &'s IconRecord)> {
    let query = Query::new(name);
    if query.normalized.is_empty() {
        return None;
    }
    STRATEGIES
        .iter()
        .find_map(|(step, strategy)| strategy(&query, store).map(|record| (*step, record)))
}

/// [`find_icon`] without the step.
pub fn match_icon<'s>(name: &str, store: &'s dyn IconStore) -> Option<&'s IconRecord> {
    find_icon(name, store).map(|(_, record)| record)
}

/// Assign icons to every entry that has none.
///
/// Entries with an image or a non-placeholder symbol are left alone. A hit
/// with an image sets `iconUrl` and clears the symbol; otherwise the symbol
/// is set. Returns how many entries changed, so a second run over the same
/// document reports zero.
pub fn apply_icon_matching(doc: &mut ConfigDocument, store: &dyn IconStore) -> usize {
    let mut changed = 0;

    for entry in doc.entries_mut().filter(|e| !e.has_real_icon()) {
        let Some(record) = match_icon(&entry.name, store) else {
            continue;
        };

        let before = (entry.icon.clone(), entry.icon_url.clone());
        match (&record.image_url, &record.icon) {
            (Some(url), _) if !url.is_empty() => {
                entry.icon_url = Some(url.clone());
                entry.icon = Some(String::new());
            }
            (_, Some(icon)) if !icon.is_empty() => entry.icon = Some(icon.clone()),
            _ => continue,
        }

        if (&entry.icon, &entry.icon_url) != (&before.0, &before.1) {
            changed += 1;
        }
    }

    changed
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
