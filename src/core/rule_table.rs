//! Built-in consolidation table, used when the config has no `consolidations`.

use super::consolidate::ConsolidationRule;

pub fn builtin_rules() -> Vec<ConsolidationRule> {
    [
        ("common_networks", "Networks", &["common_networksLabel"][..]),
        (
            "common_editName",
            "Edit {name}",
            &[
                "daemonApiKeys_editApiKey",
                "groups_editGroup",
                "hosts_editHost",
                "networks_editNetwork",
                "shares_editShare",
                "subnets_editSubnet",
                "tags_editTag",
                "topology_editTopology",
                "userApiKeys_editApiKey",
            ][..],
        ),
        (
            "common_enableApiKey",
            "Enable API Key",
            &["daemonApiKeys_enableApiKey", "userApiKeys_enableApiKey"][..],
        ),
        (
            "common_expirationDateOptional",
            "Expiration Date (Optional)",
            &["daemonApiKeys_expirationDate", "userApiKeys_expirationDate"][..],
        ),
        (
            "common_expirationNeverHelp",
            "Leave empty for keys that never expire",
            &["daemonApiKeys_expirationDateHelp", "userApiKeys_expirationHelp"][..],
        ),
        (
            "common_failedGenerateApiKey",
            "Failed to generate API key",
            &[
                "daemonApiKeys_failedGenerate",
                "daemons_failedGenerateKey",
                "userApiKeys_failedGenerate",
            ][..],
        ),
        (
            "common_failedRotateApiKey",
            "Failed to rotate API key",
            &["daemonApiKeys_failedRotate", "userApiKeys_failedRotate"][..],
        ),
        (
            "common_keyDetails",
            "Key Details",
            &["daemonApiKeys_keyDetails", "userApiKeys_keyDetails"][..],
        ),
        (
            "common_apiKeyNameHelp",
            "A friendly name to help you identify this key",
            &["daemonApiKeys_nameHelp", "userApiKeys_nameHelp"][..],
        ),
        (
            "common_generateKey",
            "Generate Key",
            &["apiKeys_generateKey", "daemons_generateKey"][..],
        ),
        (
            "common_pressGenerateKey",
            "Press Generate Key...",
            &["apiKeys_pressGenerate", "daemons_pressGenerateKey"][..],
        ),
        (
            "common_confirmDeleteName",
            "Are you sure you want to delete \"{name}\"?",
            &[
                "discovery_confirmDeleteSingle",
                "groups_confirmDelete",
                "hosts_confirmDelete",
                "shares_confirmDelete",
                "subnets_confirmDelete",
                "tags_confirmDelete",
            ][..],
        ),
        (
            "common_ipAddress",
            "IP Address",
            &["discovery_ipAddress", "hosts_interfaces_ipAddress"][..],
        ),
        (
            "common_noTypeSpecified",
            "No type specified",
            &["groups_noTypeSpecified", "subnets_noTypeSpecified"][..],
        ),
        (
            "hosts_consolidateModal_title",
            "Consolidate Hosts",
            &["hosts_consolidateModal_consolidateHosts"][..],
        ),
        (
            "hosts_interfaces_deleteTitle",
            "Delete Interface",
            &["hosts_interfaces_deleteConfirm"][..],
        ),
        (
            "hosts_ports_deleteTitle",
            "Delete Port",
            &["hosts_ports_deleteConfirm"][..],
        ),
        (
            "common_interfaceBindings",
            "Interface Bindings",
            &["hosts_services_interfaceBindings", "services_interfaceBindings"][..],
        ),
        (
            "common_portBindings",
            "Port Bindings",
            &["hosts_services_portBindings", "services_portBindings"][..],
        ),
        (
            "common_noServiceSelected",
            "No service selected",
            &["hosts_services_noSelected", "hosts_virtualization_noSelected"][..],
        ),
        (
            "common_userId",
            "User ID",
            &["support_userId", "settings_account_userId"][..],
        ),
        (
            "common_emailAndPassword",
            "Email & Password",
            &["settings_account_emailPassword", "users_emailAndPassword"][..],
        ),
        (
            "common_tryAgainLater",
            "Please try again later",
            &["settings_billing_tryAgainLater", "settings_org_tryAgainLater"][..],
        ),
    ]
    .into_iter()
    .map(|(new_key, value, old_keys)| ConsolidationRule::new(new_key, value, old_keys))
    .collect()
}
