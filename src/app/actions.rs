// UNRaf Academy - app/actions.rs
//
// Dashboard and profile mutations on the in-memory catalogue.
//
// Every action reports its outcome as a `Notice` for the presentation
// layer to display, and successful actions append an audit entry to the
// system log. Nothing is persisted; there is no authorization.

use crate::core::catalog::Catalog;
use crate::core::model::{Favorite, LogKind, ResourceKind, SystemLog, Upload, UserAccount};
use chrono::NaiveDateTime;
use std::fmt;

/// Status label given to blocked accounts and resources.
pub const STATUS_BLOCKED: &str = "Bloqueado";

/// Status label given to newly added accounts.
pub const STATUS_PENDING: &str = "Pendiente";

/// Review status given to newly submitted uploads.
pub const STATUS_IN_REVIEW: &str = "En Revisión";

/// Result label recorded for successful audited actions.
pub const RESULT_SUCCESS: &str = "Exitoso";

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    /// A destructive action that succeeded (rendered like an error).
    Destructive,
    Error,
}

impl NoticeLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Destructive => "destructive",
            NoticeLevel::Error => "error",
        }
    }
}

/// Outcome of an action, shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.label(), self.message)
    }
}

/// Who is acting and when; recorded in the audit log.
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub actor: String,
    pub at: NaiveDateTime,
}

/// Fields of the "add user" form.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Next free id after the largest one in use, or `None` once `u32::MAX` is taken.
fn next_id(ids: impl Iterator<Item = u32>) -> Option<u32> {
    match ids.max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

fn id_exhausted(what: &str) -> Notice {
    tracing::warn!(what, "No free id left in listing");
    Notice::new(
        NoticeLevel::Error,
        format!("No hay identificadores disponibles para {what}"),
    )
}

fn audit(catalog: &mut Catalog, ctx: &ActionContext, kind: LogKind, action: String) {
    let Some(id) = next_id(catalog.logs.iter().map(|l| l.id)) else {
        tracing::warn!(action = %action, "System log id space exhausted, audit entry dropped");
        return;
    };
    catalog.logs.push(SystemLog {
        id,
        user: ctx.actor.clone(),
        action,
        kind,
        date: ctx.at.format("%Y-%m-%d %H:%M").to_string(),
        result: RESULT_SUCCESS.to_string(),
    });
}

fn not_found(what: &str, id: u32) -> Notice {
    tracing::warn!(what, id, "Action target not found");
    Notice::new(NoticeLevel::Error, format!("{what} #{id} no encontrado"))
}

/// Register a new user account in the pending state.
pub fn add_user(catalog: &mut Catalog, ctx: &ActionContext, user: NewUser) -> Notice {
    let name = user.name.trim();
    let email = user.email.trim();
    if name.is_empty() || !email.contains('@') {
        return Notice::new(
            NoticeLevel::Error,
            "Nombre y correo electrónico válidos son obligatorios",
        );
    }
    if catalog.users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
        return Notice::new(
            NoticeLevel::Error,
            format!("Ya existe un usuario con el correo {email}"),
        );
    }

    let Some(id) = next_id(catalog.users.iter().map(|u| u.id)) else {
        return id_exhausted("usuarios");
    };
    catalog.users.push(UserAccount {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: user.role,
        status: STATUS_PENDING.to_string(),
        date: ctx.at.date().format("%Y-%m-%d").to_string(),
    });
    audit(catalog, ctx, LogKind::Edit, format!("Agregó usuario {name}"));
    tracing::info!(id, "User added");
    Notice::new(NoticeLevel::Success, "Usuario agregado correctamente")
}

/// Change a user's role and status.
pub fn update_user(
    catalog: &mut Catalog,
    ctx: &ActionContext,
    id: u32,
    role: &str,
    status: &str,
) -> Notice {
    let Some(user) = catalog.users.iter_mut().find(|u| u.id == id) else {
        return not_found("Usuario", id);
    };
    user.role = role.to_string();
    user.status = status.to_string();
    let name = user.name.clone();
    audit(catalog, ctx, LogKind::Edit, format!("Editó usuario {name}"));
    tracing::info!(id, role, status, "User updated");
    Notice::new(NoticeLevel::Success, "Usuario actualizado correctamente")
}

/// Block a user account.
pub fn block_user(catalog: &mut Catalog, ctx: &ActionContext, id: u32) -> Notice {
    let Some(user) = catalog.users.iter_mut().find(|u| u.id == id) else {
        return not_found("Usuario", id);
    };
    user.status = STATUS_BLOCKED.to_string();
    let name = user.name.clone();
    audit(catalog, ctx, LogKind::Block, format!("Bloqueó usuario {name}"));
    tracing::info!(id, "User blocked");
    Notice::new(NoticeLevel::Warning, format!("Usuario {name} bloqueado"))
}

/// Permanently remove a user account.
pub fn delete_user(catalog: &mut Catalog, ctx: &ActionContext, id: u32) -> Notice {
    let Some(pos) = catalog.users.iter().position(|u| u.id == id) else {
        return not_found("Usuario", id);
    };
    let user = catalog.users.remove(pos);
    audit(catalog, ctx, LogKind::Edit, format!("Eliminó usuario {}", user.name));
    tracing::info!(id, "User deleted");
    Notice::new(
        NoticeLevel::Destructive,
        format!("Usuario {} eliminado permanentemente", user.name),
    )
}

/// Block a published resource.
pub fn block_resource(catalog: &mut Catalog, ctx: &ActionContext, id: u32) -> Notice {
    let Some(resource) = catalog.resources.iter_mut().find(|r| r.id == id) else {
        return not_found("Recurso", id);
    };
    resource.status = STATUS_BLOCKED.to_string();
    let title = resource.title.clone();
    audit(catalog, ctx, LogKind::Block, format!("Bloqueó recurso {title}"));
    tracing::info!(id, "Resource blocked");
    Notice::new(NoticeLevel::Warning, format!("Recurso {title} bloqueado"))
}

/// Permanently remove a published resource.
pub fn delete_resource(catalog: &mut Catalog, ctx: &ActionContext, id: u32) -> Notice {
    let Some(pos) = catalog.resources.iter().position(|r| r.id == id) else {
        return not_found("Recurso", id);
    };
    let resource = catalog.resources.remove(pos);
    audit(
        catalog,
        ctx,
        LogKind::Edit,
        format!("Eliminó recurso {}", resource.title),
    );
    tracing::info!(id, "Resource deleted");
    Notice::new(
        NoticeLevel::Destructive,
        format!("Recurso {} eliminado", resource.title),
    )
}

/// Save edits to one of the user's uploads.
pub fn update_upload(
    catalog: &mut Catalog,
    ctx: &ActionContext,
    id: u32,
    name: &str,
    kind: ResourceKind,
) -> Notice {
    let name = name.trim();
    if name.is_empty() {
        return Notice::new(NoticeLevel::Error, "El título es obligatorio");
    }
    let Some(upload) = catalog.uploads.iter_mut().find(|u| u.id == id) else {
        return not_found("Recurso", id);
    };
    upload.name = name.to_string();
    upload.kind = kind;
    audit(catalog, ctx, LogKind::Edit, format!("Editó recurso {name}"));
    tracing::info!(id, "Upload updated");
    Notice::new(NoticeLevel::Success, "Recurso actualizado correctamente")
}

/// Fields of the "upload resource" form.
#[derive(Debug, Clone)]
pub struct NewUpload {
    pub name: String,
    pub kind: ResourceKind,
}

/// Submit a new resource. It enters the uploads listing awaiting review.
pub fn add_upload(catalog: &mut Catalog, ctx: &ActionContext, upload: NewUpload) -> Notice {
    let name = upload.name.trim();
    if name.is_empty() {
        return Notice::new(NoticeLevel::Error, "El título es obligatorio");
    }
    let Some(id) = next_id(catalog.uploads.iter().map(|u| u.id)) else {
        return id_exhausted("recursos");
    };
    catalog.uploads.push(Upload {
        id,
        name: name.to_string(),
        date: ctx.at.date().format("%Y-%m-%d").to_string(),
        kind: upload.kind,
        status: STATUS_IN_REVIEW.to_string(),
    });
    audit(catalog, ctx, LogKind::Upload, format!("Subió recurso {name}"));
    tracing::info!(id, kind = %upload.kind, "Upload submitted");
    Notice::new(NoticeLevel::Success, "Recurso subido exitosamente")
}

/// Add a resource to the favourites, or remove it if it is already there.
/// Favourites are keyed by the resource id.
pub fn toggle_favorite(catalog: &mut Catalog, ctx: &ActionContext, favorite: Favorite) -> Notice {
    if let Some(pos) = catalog.favorites.iter().position(|f| f.id == favorite.id) {
        let removed = catalog.favorites.remove(pos);
        audit(
            catalog,
            ctx,
            LogKind::Edit,
            format!("Quitó favorito {}", removed.name),
        );
        tracing::info!(id = removed.id, "Favourite removed");
        return Notice::new(NoticeLevel::Success, "Eliminado de favoritos");
    }

    let (id, name) = (favorite.id, favorite.name.clone());
    catalog.favorites.push(favorite);
    audit(catalog, ctx, LogKind::Edit, format!("Agregó favorito {name}"));
    tracing::info!(id, "Favourite added");
    Notice::new(NoticeLevel::Success, "Agregado a favoritos")
}
