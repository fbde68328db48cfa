//! Automatic categorisation of bundled icon-pack files.
//!
//! Categories are chosen in this order:
//!
//! 1. exact lookup in [`SPECIFIC_APPS`],
//! 2. substring containment (either direction) against [`SPECIFIC_APPS`],
//! 3. substring containment of any keyword in [`CATEGORY_KEYWORDS`],
//! 4. [`DEFAULT_CATEGORY`].
//!
//! Both tables are scanned in declaration order, so an earlier row wins when
//! several would match.

/// Category for names nothing else claims.
pub const DEFAULT_CATEGORY: &str = "development";

/// Category that receives icons orphaned by a deleted category.
pub const FALLBACK_CATEGORY: &str = "uploaded";

/// URL prefix under which pack images are served.
pub const PACK_IMAGE_URL_PREFIX: &str = "/api/icons/dashboard/";

const PACK_EXTENSION: &str = ".svg";

/// Theme variants of a base icon; only the base is imported.
const VARIANT_MARKERS: &[&str] = &["-dark.", "-light."];

/// Well-known applications whose category keyword matching would get wrong.
pub const SPECIFIC_APPS: &[(&str, &str)] = &[
    // Home automation
    ("home-assistant", "automation"),
    ("homeassistant", "automation"),
    ("node-red", "automation"),
    ("nodered", "automation"),
    ("n8n", "automation"),
    ("frigate", "automation"),
    ("scrypted", "automation"),
    ("double-take", "automation"),
    ("compreface", "automation"),
    ("zigbee2mqtt", "automation"),
    ("zwave-js-ui", "automation"),
    ("esphome", "automation"),
    ("tasmota", "automation"),
    ("homebridge", "automation"),
    ("openhab", "automation"),
    ("domoticz", "automation"),
    ("hass", "automation"),
    // Media
    ("plex", "media"),
    ("jellyfin", "media"),
    ("emby", "media"),
    ("sonarr", "media"),
    ("radarr", "media"),
    ("lidarr", "media"),
    ("bazarr", "media"),
    ("tautulli", "media"),
    ("overseerr", "media"),
    ("ombi", "media"),
    ("audiobookshelf", "media"),
    ("navidrome", "media"),
    ("kavita", "media"),
    ("stash", "media"),
    ("immich", "media"),
    ("photoprism", "media"),
    // Downloads
    ("qbittorrent", "downloads"),
    ("deluge", "downloads"),
    ("transmission", "downloads"),
    ("prowlarr", "downloads"),
    ("jackett", "downloads"),
    ("flaresolverr", "downloads"),
    ("readarr", "downloads"),
    ("whisparr", "downloads"),
    ("nzbget", "downloads"),
    ("sabnzbd", "downloads"),
    ("rutorrent", "downloads"),
    ("autobrr", "downloads"),
    // Networking
    ("nginx", "networking"),
    ("traefik", "networking"),
    ("caddy", "networking"),
    ("pihole", "networking"),
    ("adguard-home", "networking"),
    ("adguard", "networking"),
    ("pfsense", "networking"),
    ("opnsense", "networking"),
    ("unifi", "networking"),
    ("wireguard", "networking"),
    ("tailscale", "networking"),
    ("zerotier", "networking"),
    ("cloudflare", "networking"),
    ("cloudflared", "networking"),
    // Containers
    ("docker", "containers"),
    ("portainer", "containers"),
    ("rancher", "containers"),
    ("kubernetes", "containers"),
    // Security
    ("vaultwarden", "security"),
    ("bitwarden", "security"),
    ("authelia", "security"),
    ("keycloak", "security"),
    ("crowdsec", "security"),
    // Virtualization
    ("proxmox", "virtualization"),
    ("vmware", "virtualization"),
    ("virtualbox", "virtualization"),
    // Monitoring
    ("grafana", "monitoring"),
    ("prometheus", "monitoring"),
    ("uptime-kuma", "monitoring"),
    ("netdata", "monitoring"),
    // Storage
    ("nextcloud", "storage"),
    ("paperless", "storage"),
    ("paperless-ngx", "storage"),
    ("filebrowser", "storage"),
];

/// Category id → keywords.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "containers",
        &[
            "docker", "container", "kubernetes", "k8s", "k3s", "podman", "portainer", "rancher",
            "nomad", "swarm", "helm", "compose", "lxc", "lxd",
        ],
    ),
    (
        "media",
        &[
            "plex", "jellyfin", "emby", "kodi", "sonarr", "radarr", "lidarr", "bazarr", "tautulli",
            "overseerr", "ombi", "audiobookshelf", "navidrome", "music", "video", "stream", "media",
            "tv", "movie", "photo", "image", "gallery", "immich", "photoprism", "kavita", "stash",
            "youtube", "spotify", "netflix", "twitch",
        ],
    ),
    (
        "downloads",
        &[
            "torrent", "qbittorrent", "deluge", "transmission", "nzbget", "sabnzbd", "usenet",
            "download", "prowlarr", "jackett", "flaresolverr", "autobrr", "readarr", "whisparr",
            "mylar", "medusa", "sickgear", "rutorrent", "aria",
        ],
    ),
    (
        "monitoring",
        &[
            "grafana", "prometheus", "monitor", "alert", "metric", "log", "uptime", "kuma",
            "netdata", "zabbix", "nagios", "datadog", "elastic", "kibana", "splunk", "influx",
            "telegraf", "glances", "healthcheck", "statping", "gatus",
        ],
    ),
    (
        "storage",
        &[
            "nextcloud", "owncloud", "seafile", "syncthing", "storage", "backup", "nas", "minio",
            "s3", "ceph", "gluster", "duplicati", "restic", "borg", "kopia", "rclone",
            "filebrowser", "paperless", "calibre", "komga", "tandoor", "mealie", "grocy", "homebox",
        ],
    ),
    (
        "networking",
        &[
            "nginx", "traefik", "caddy", "haproxy", "proxy", "dns", "vpn", "wireguard", "openvpn",
            "tailscale", "zerotier", "cloudflare", "pihole", "adguard", "network", "firewall",
            "pfsense", "opnsense", "router", "unifi", "ubiquiti", "mikrotik", "cisco",
        ],
    ),
    (
        "databases",
        &[
            "postgres", "mysql", "mariadb", "mongo", "redis", "database", "db", "sql", "sqlite",
            "cassandra", "couchdb", "elasticsearch", "clickhouse", "timescale", "oracle", "mssql",
        ],
    ),
    (
        "development",
        &[
            "github", "gitlab", "gitea", "git", "code", "dev", "ci", "cd", "jenkins", "drone",
            "argo", "harbor", "npm", "yarn", "webpack", "vscode", "ide", "docker-registry", "sonar",
            "nexus", "artifactory",
        ],
    ),
    (
        "communication",
        &[
            "chat", "message", "mail", "email", "discord", "slack", "telegram", "matrix", "rocket",
            "mattermost", "teams", "zoom", "gotify", "ntfy", "pushover", "apprise", "smtp", "imap",
        ],
    ),
    (
        "automation",
        &[
            "homeassistant", "home-assistant", "nodered", "node-red", "n8n", "mqtt", "zigbee",
            "zwave", "esphome", "tasmota", "homebridge", "openhab", "domoticz", "frigate",
            "scrypted", "automation", "iot", "smart", "hass",
        ],
    ),
    (
        "os",
        &[
            "ubuntu", "debian", "fedora", "centos", "redhat", "arch", "linux", "windows", "macos",
            "freebsd", "alpine", "truenas", "openmediavault", "os", "operating",
        ],
    ),
    (
        "security",
        &[
            "auth", "vault", "bitwarden", "keepass", "password", "security", "encrypt", "ssl",
            "tls", "cert", "letsencrypt", "authelia", "keycloak", "crowdsec", "fail2ban", "2fa",
            "totp",
        ],
    ),
    (
        "cloud",
        &[
            "aws", "azure", "gcp", "google-cloud", "digitalocean", "linode", "vultr", "hetzner",
            "ovh", "cloud", "serverless", "lambda", "terraform", "ansible", "pulumi",
        ],
    ),
    (
        "hardware",
        &[
            "intel", "amd", "nvidia", "raspberry", "pi", "hp", "dell", "lenovo", "asus",
            "synology", "qnap", "cpu", "gpu", "hardware",
        ],
    ),
    (
        "virtualization",
        &[
            "proxmox", "vmware", "esxi", "virtualbox", "kvm", "qemu", "hyper-v", "xen", "virtual",
            "vm", "hypervisor", "virt",
        ],
    ),
];

/// Pick a category id for an icon base name (file name without extension).
pub fn categorize_icon(base_name: &str) -> &'static str {
    let name = base_name.to_lowercase();
    if name.is_empty() {
        return DEFAULT_CATEGORY;
    }

    if let Some((_, category)) = SPECIFIC_APPS.iter().find(|(app, _)| *app == name) {
        return *category;
    }

    if let Some((_, category)) = SPECIFIC_APPS
        .iter()
        .find(|(app, _)| name.contains(app) || app.contains(name.as_str()))
    {
        return *category;
    }

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Whether a file name is a `-dark.` / `-light.` theme variant.
pub fn is_variant_file(filename: &str) -> bool {
    VARIANT_MARKERS.iter().any(|m| filename.contains(m))
}

/// `uptime-kuma` → `Uptime Kuma`.
pub fn display_name(base_name: &str) -> String {
    base_name
        .split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// A library row derived from one icon-pack file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackIcon {
    pub id: String,
    pub name: String,
    pub category_id: &'static str,
    pub image_url: String,
}

/// Build the library row for a pack file, or `None` if the file is not an
/// importable SVG (wrong extension or a theme variant).
pub fn pack_icon(filename: &str) -> Option<PackIcon> {
    let base = filename.strip_suffix(PACK_EXTENSION)?;
    if base.is_empty() || is_variant_file(filename) {
        return None;
    }

    Some(PackIcon {
        id: base.to_lowercase(),
        name: display_name(base),
        category_id: categorize_icon(base),
        image_url: format!("{PACK_IMAGE_URL_PREFIX}{filename}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- categorize_icon ------------------------------------------------------

    #[test]
    fn specific_app_exact() {
        assert_eq!(categorize_icon("home-assistant"), "automation");
        assert_eq!(categorize_icon("Jellyfin"), "media");
        assert_eq!(categorize_icon("docker"), "containers");
    }

    #[test]
    fn specific_app_overrides_keywords() {
        // No keyword row mentions these; without the override they would
        // land in the default category.
        assert_eq!(categorize_icon("double-take"), "automation");
        assert_eq!(categorize_icon("compreface"), "automation");
    }

    #[test]
    fn specific_app_partial_either_direction() {
        // Name contains an app.
        assert_eq!(categorize_icon("plex-meta-manager"), "media");
        // App contains the name.
        assert_eq!(categorize_icon("paperless-ng"), "storage");
    }

    #[test]
    fn keyword_table() {
        assert_eq!(categorize_icon("mysql"), "databases");
        assert_eq!(categorize_icon("zabbix"), "monitoring");
        assert_eq!(categorize_icon("qnap"), "hardware");
        assert_eq!(categorize_icon("mattermost"), "communication");
    }

    #[test]
    fn keyword_rows_scanned_in_order() {
        // "mqtt" is an automation keyword, but the media row comes first.
        assert_eq!(categorize_icon("mediamqtt"), "media");
        // "aria" (downloads) precedes the databases row.
        assert_eq!(categorize_icon("mariadb"), "downloads");
    }

    #[test]
    fn unknown_defaults_to_development() {
        assert_eq!(categorize_icon("zzz"), DEFAULT_CATEGORY);
        assert_eq!(categorize_icon(""), DEFAULT_CATEGORY);
    }

    // -- filenames ------------------------------------------------------------

    #[test]
    fn variants_are_detected() {
        assert!(is_variant_file("immich-dark.svg"));
        assert!(is_variant_file("immich-light.svg"));
        assert!(!is_variant_file("immich.svg"));
        assert!(!is_variant_file("darktable.svg"));
    }

    #[test]
    fn display_names_are_title_cased() {
        assert_eq!(display_name("uptime-kuma"), "Uptime Kuma");
        assert_eq!(display_name("zigbee2mqtt"), "Zigbee2mqtt");
        assert_eq!(display_name("AdGuard_HOME"), "Adguard Home");
        assert_eq!(display_name("a--b"), "A B");
    }

    #[test]
    fn pack_icon_from_svg() {
        assert_eq!(
            pack_icon("Uptime-Kuma.svg"),
            Some(PackIcon {
                id: "uptime-kuma".into(),
                name: "Uptime Kuma".into(),
                category_id: "monitoring",
                image_url: "/api/icons/dashboard/Uptime-Kuma.svg".into(),
            })
        );
    }

    #[test]
    fn pack_icon_skips_non_svg_and_variants() {
        assert_eq!(pack_icon("plex.png"), None);
        assert_eq!(pack_icon("plex-dark.svg"), None);
        assert_eq!(pack_icon(".svg"), None);
    }
}
