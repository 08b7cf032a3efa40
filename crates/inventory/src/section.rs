use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Bios,
    Cpu,
    Disk,
    Gpu,
    Network,
    Monitor,
    Usb,
    Arp,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Bios,
        Section::Cpu,
        Section::Disk,
        Section::Gpu,
        Section::Network,
        Section::Monitor,
        Section::Usb,
        Section::Arp,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Bios => "bios",
            Self::Cpu => "cpu",
            Self::Disk => "disk",
            Self::Gpu => "gpu",
            Self::Network => "network",
            Self::Monitor => "monitor",
            Self::Usb => "usb",
            Self::Arp => "arp",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Bios => "bios / system information",
            Self::Cpu => "cpu information",
            Self::Disk => "disk information",
            Self::Gpu => "gpu information",
            Self::Network => "network adapter information",
            Self::Monitor => "monitor information (edid)",
            Self::Usb => "usb devices",
            Self::Arp => "arp table",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bios" | "system" | "firmware" => Some(Self::Bios),
            "cpu" | "processor" => Some(Self::Cpu),
            "disk" | "storage" => Some(Self::Disk),
            "gpu" | "video" => Some(Self::Gpu),
            "network" | "nic" => Some(Self::Network),
            "monitor" | "display" => Some(Self::Monitor),
            "usb" => Some(Self::Usb),
            "arp" => Some(Self::Arp),
            _ => None,
        }
    }
}
