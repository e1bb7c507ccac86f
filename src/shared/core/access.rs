// Roles and the permissions they grant.
//
// Handlers ask `role.can(Permission::X)`; role names are never compared as strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Monteur,
    Meister,
    #[serde(alias = "Büro")]
    Buero,
    Admin,
    Lohnbuchhaltung,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    TrackOwnTime,
    ReviewTimeEntries,
    WorkOrders,
    ViewOrders,
    ManageOrders,
    ManageCustomers,
    RequestAbsence,
    ReviewAbsences,
    SubmitReports,
    ReviewReports,
    ViewPayroll,
    ExportData,
    ManageUsers,
}

const MONTEUR: &[Permission] = &[
    Permission::TrackOwnTime,
    Permission::WorkOrders,
    Permission::RequestAbsence,
    Permission::SubmitReports,
];

const MEISTER: &[Permission] = &[
    Permission::TrackOwnTime,
    Permission::WorkOrders,
    Permission::ViewOrders,
    Permission::RequestAbsence,
    Permission::SubmitReports,
    Permission::ReviewTimeEntries,
    Permission::ReviewAbsences,
    Permission::ReviewReports,
];

const BUERO: &[Permission] = &[
    Permission::ViewOrders,
    Permission::ManageOrders,
    Permission::ManageCustomers,
    Permission::RequestAbsence,
    Permission::ExportData,
];

const LOHNBUCHHALTUNG: &[Permission] = &[
    Permission::ViewPayroll,
    Permission::ExportData,
    Permission::RequestAbsence,
];

const ADMIN: &[Permission] = &[
    Permission::TrackOwnTime,
    Permission::ReviewTimeEntries,
    Permission::WorkOrders,
    Permission::ViewOrders,
    Permission::ManageOrders,
    Permission::ManageCustomers,
    Permission::RequestAbsence,
    Permission::ReviewAbsences,
    Permission::SubmitReports,
    Permission::ReviewReports,
    Permission::ViewPayroll,
    Permission::ExportData,
    Permission::ManageUsers,
];

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Monteur,
        Role::Meister,
        Role::Buero,
        Role::Admin,
        Role::Lohnbuchhaltung,
    ];

    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Role::Monteur => MONTEUR,
            Role::Meister => MEISTER,
            Role::Buero => BUERO,
            Role::Admin => ADMIN,
            Role::Lohnbuchhaltung => LOHNBUCHHALTUNG,
        }
    }

    pub fn can(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Monteur => "Monteur",
            Role::Meister => "Meister",
            Role::Buero => "Buero",
            Role::Admin => "Admin",
            Role::Lohnbuchhaltung => "Lohnbuchhaltung",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monteur" => Ok(Role::Monteur),
            "meister" | "supervisor" => Ok(Role::Meister),
            "buero" | "büro" => Ok(Role::Buero),
            "admin" => Ok(Role::Admin),
            "lohnbuchhaltung" => Ok(Role::Lohnbuchhaltung),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}
