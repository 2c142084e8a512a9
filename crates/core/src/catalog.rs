// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative catalog mapping diagnostic actions to shell command lines.
//!
//! Each [`ActionId`] carries a per-platform template, a [`Safety`] class the
//! presentation layer uses to decide on confirmation, and an optional
//! free-text [`Parameter`] substituted into the `{target}` placeholder.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::platform::Platform;

/// Placeholder replaced by the user-supplied target.
pub const TARGET_PLACEHOLDER: &str = "{target}";

/// Host pinged by the internet check.
pub const PROBE_HOST: &str = "8.8.8.8";

/// Domain resolved by the internet check.
pub const PROBE_DOMAIN: &str = "google.com";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown action `{0}` (see `netdiag actions`)")]
    UnknownAction(String),

    #[error("action `{action}` needs a {what}")]
    MissingTarget { action: ActionId, what: &'static str },

    #[error("action `{0}` does not take a target")]
    UnexpectedTarget(ActionId),
}

crate::keyword_enum! {
    /// Menu grouping of actions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum Category {
        Diagnostics => "diagnostics",
        Arp => "arp",
        Services => "services",
        System => "system",
    }
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Diagnostics => "Network diagnostics",
            Category::Arp => "ARP",
            Category::Services => "Services",
            Category::System => "System",
        }
    }

    /// Explanatory text shown next to the category's actions.
    pub fn info(self) -> &'static str {
        match self {
            Category::Diagnostics => {
                "Classic commands for analyzing connectivity and network state.\n\
                 They do not modify the system."
            }
            Category::Arp => {
                "ARP maps IP addresses to MAC addresses.\n\n\
                 Flushing the cache may interrupt connections."
            }
            Category::Services => "List, start, or stop system services.\n\nUse with care.",
            Category::System => {
                "Basic system and network information.\n\n\
                 Some commands only exist on Windows."
            }
        }
    }

    pub fn actions(self) -> impl Iterator<Item = ActionId> {
        ActionId::ALL.iter().copied().filter(move |a| a.category() == self)
    }
}

crate::keyword_enum! {
    /// How an action affects the host, used to pick a confirmation policy.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Safety {
        /// Only reads state.
        ReadOnly => "read-only",
        /// May disrupt connectivity; ask before running.
        Confirmable => "confirmable",
        /// Changes system state; ask before running.
        Mutating => "mutating",
    }
}

impl Safety {
    pub fn needs_confirmation(self) -> bool {
        !matches!(self, Safety::ReadOnly)
    }
}

/// Free-text input an action needs from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    None,
    Host,
    Domain,
    Service,
}

impl Parameter {
    /// Prompt text, or `None` when the action takes no input.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Parameter::None => None,
            Parameter::Host => Some("IP or domain"),
            Parameter::Domain => Some("domain"),
            Parameter::Service => Some("service name"),
        }
    }
}

crate::keyword_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum ActionId {
        ShowIp => "show-ip",
        IpDetail => "ip-detail",
        Ping => "ping",
        Traceroute => "traceroute",
        PathPing => "pathping",
        NsLookup => "nslookup",
        Connections => "connections",
        ArpList => "arp-list",
        ArpFlush => "arp-flush",
        ServiceList => "service-list",
        ServiceStart => "service-start",
        ServiceStop => "service-stop",
        Hostname => "hostname",
        Mac => "mac",
    }
}

impl ActionId {
    pub fn label(self) -> &'static str {
        match self {
            ActionId::ShowIp => "Show IP",
            ActionId::IpDetail => "Detailed IP",
            ActionId::Ping => "Ping",
            ActionId::Traceroute => "Traceroute",
            ActionId::PathPing => "PathPing / MTR",
            ActionId::NsLookup => "NSLookup",
            ActionId::Connections => "Connections",
            ActionId::ArpList => "List ARP cache",
            ActionId::ArpFlush => "Flush ARP cache",
            ActionId::ServiceList => "List services",
            ActionId::ServiceStart => "Start service",
            ActionId::ServiceStop => "Stop service",
            ActionId::Hostname => "Hostname",
            ActionId::Mac => "MAC addresses",
        }
    }

    pub fn category(self) -> Category {
        match self {
            ActionId::ShowIp
            | ActionId::IpDetail
            | ActionId::Ping
            | ActionId::Traceroute
            | ActionId::PathPing
            | ActionId::NsLookup
            | ActionId::Connections => Category::Diagnostics,
            ActionId::ArpList | ActionId::ArpFlush => Category::Arp,
            ActionId::ServiceList | ActionId::ServiceStart | ActionId::ServiceStop => {
                Category::Services
            }
            ActionId::Hostname | ActionId::Mac => Category::System,
        }
    }

    pub fn safety(self) -> Safety {
        match self {
            ActionId::ArpFlush => Safety::Confirmable,
            ActionId::ServiceStart | ActionId::ServiceStop => Safety::Mutating,
            _ => Safety::ReadOnly,
        }
    }

    pub fn parameter(self) -> Parameter {
        match self {
            ActionId::Ping | ActionId::Traceroute | ActionId::PathPing => Parameter::Host,
            ActionId::NsLookup => Parameter::Domain,
            ActionId::ServiceStart | ActionId::ServiceStop => Parameter::Service,
            _ => Parameter::None,
        }
    }

    /// Warning shown in the confirmation prompt for non-read-only actions.
    pub fn warning(self) -> Option<&'static str> {
        match self {
            ActionId::ArpFlush => Some("Flushing the ARP cache can cut network connectivity."),
            ActionId::ServiceStart => Some("This starts a system service."),
            ActionId::ServiceStop => Some("Stopping a service can interrupt whatever depends on it."),
            _ => None,
        }
    }

    /// Built-in command template for `platform`.
    pub fn default_template(self, platform: Platform) -> &'static str {
        match platform {
            Platform::Windows => windows_template(self),
            Platform::MacOs => macos_template(self),
            Platform::Linux | Platform::Other => linux_template(self),
        }
    }
}

impl FromStr for ActionId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        ActionId::from_keyword(&key).ok_or_else(|| CatalogError::UnknownAction(s.to_string()))
    }
}

fn windows_template(action: ActionId) -> &'static str {
    match action {
        ActionId::ShowIp => "ipconfig",
        ActionId::IpDetail => "ipconfig /all",
        ActionId::Ping => "ping {target}",
        ActionId::Traceroute => "tracert {target}",
        ActionId::PathPing => "pathping {target}",
        ActionId::NsLookup => "nslookup {target}",
        ActionId::Connections => "netstat -an",
        ActionId::ArpList => "arp -a",
        ActionId::ArpFlush => "arp -d *",
        ActionId::ServiceList => "net start",
        ActionId::ServiceStart => "net start {target}",
        ActionId::ServiceStop => "net stop {target}",
        ActionId::Hostname => "hostname",
        ActionId::Mac => "getmac",
    }
}

fn linux_template(action: ActionId) -> &'static str {
    match action {
        ActionId::ShowIp => "ip a",
        ActionId::IpDetail => "ip a && ip r",
        ActionId::Ping => "ping -c 4 {target}",
        ActionId::Traceroute => "traceroute {target}",
        ActionId::PathPing => "mtr -r {target}",
        ActionId::NsLookup => "nslookup {target}",
        ActionId::Connections => "ss -tulpn",
        ActionId::ArpList => "ip neigh",
        ActionId::ArpFlush => "sudo ip neigh flush all",
        ActionId::ServiceList => "systemctl list-units --type=service",
        ActionId::ServiceStart => "sudo systemctl start {target}",
        ActionId::ServiceStop => "sudo systemctl stop {target}",
        ActionId::Hostname => "hostname",
        ActionId::Mac => "ip link",
    }
}

fn macos_template(action: ActionId) -> &'static str {
    match action {
        ActionId::ShowIp => "ifconfig",
        ActionId::IpDetail => "ifconfig -a && netstat -rn",
        ActionId::Connections => "netstat -an",
        ActionId::ArpList => "arp -a",
        ActionId::ArpFlush => "sudo arp -a -d",
        ActionId::ServiceList => "launchctl list",
        ActionId::ServiceStart => "sudo launchctl start {target}",
        ActionId::ServiceStop => "sudo launchctl stop {target}",
        ActionId::Mac => "ifconfig -a ether",
        other => linux_template(other),
    }
}

/// Resolved command templates for one platform.
#[derive(Debug, Clone)]
pub struct Catalog {
    platform: Platform,
    templates: BTreeMap<ActionId, String>,
}

impl Catalog {
    pub fn new(platform: Platform) -> Self {
        let templates = ActionId::ALL
            .iter()
            .map(|&id| (id, id.default_template(platform).to_string()))
            .collect();
        Self { platform, templates }
    }

    /// Replace built-in templates, e.g. from the `[commands]` config table.
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = (ActionId, String)>) -> Self {
        for (id, template) in overrides {
            tracing::debug!(action = %id, %template, "overriding catalog template");
            self.templates.insert(id, template);
        }
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn template(&self, action: ActionId) -> &str {
        self.templates
            .get(&action)
            .map(String::as_str)
            .unwrap_or_else(|| action.default_template(self.platform))
    }

    /// Build the command line for `action`.
    ///
    /// The target is trimmed and substituted verbatim; it is not quoted or
    /// validated, so shell metacharacters reach the shell unchanged.
    pub fn command(&self, action: ActionId, target: Option<&str>) -> Result<String, CatalogError> {
        let target = target.map(str::trim).filter(|t| !t.is_empty());
        match (action.parameter().prompt(), target) {
            (Some(what), None) => Err(CatalogError::MissingTarget { action, what }),
            (None, Some(_)) => Err(CatalogError::UnexpectedTarget(action)),
            (_, target) => Ok(self.render(action, target.unwrap_or_default())),
        }
    }

    /// Command lines for the combined internet check, in execution order.
    pub fn internet_check(&self) -> Vec<String> {
        vec![
            self.render(ActionId::ShowIp, ""),
            self.render(ActionId::Ping, PROBE_HOST),
            self.render(ActionId::NsLookup, PROBE_DOMAIN),
        ]
    }

    fn render(&self, action: ActionId, target: &str) -> String {
        self.template(action).replace(TARGET_PLACEHOLDER, target)
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
