//! Bundled mock dataset.
//!
//! Three organizations and three families, each with a handful of beneficiaries, their
//! packages and delivery tasks, plus couriers, templates, alerts and one login per role.
//! Beneficiaries belong to either an organization or a family, never both.

use chrono::{NaiveDate, NaiveDateTime};
use entity::prelude::*;

fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap_or_default()
}

pub fn dataset() -> Dataset {
    Dataset {
        beneficiaries: beneficiaries(),
        packages: packages(),
        tasks: tasks(),
        couriers: couriers(),
        organizations: organizations(),
        families: families(),
        templates: templates(),
        alerts: alerts(),
        users: users(),
    }
}

fn organizations() -> Vec<Organization> {
    let org = |id: &str, name: &str, phone: &str, templates: &[&str]| Organization {
        id: id.to_string(),
        name: name.to_string(),
        contact_phone: Some(phone.to_string()),
        template_ids: templates.iter().map(|t| t.to_string()).collect(),
    };

    vec![
        org("org-1", "جمعية الهلال الأحمر", "0599100200", &["tpl-1", "tpl-2"]),
        org("org-2", "مؤسسة الإغاثة الإنسانية", "0599300400", &["tpl-3"]),
        org("org-3", "جمعية البر الخيرية", "0599500600", &["tpl-4"]),
    ]
}

fn families() -> Vec<Family> {
    let family = |id: &str, name: &str, head: &str, location: &str, rate: f32| Family {
        id: id.to_string(),
        name: name.to_string(),
        head_of_family: head.to_string(),
        location: location.to_string(),
        completion_rate: rate,
    };

    vec![
        family("fam-1", "عائلة أبو أحمد", "محمد أبو أحمد", "خان يونس", 75.0),
        family("fam-2", "عائلة السعيد", "خالد السعيد", "رفح", 40.0),
        family("fam-3", "عائلة النجار", "سامي النجار", "غزة", 0.0),
    ]
}

struct Seed<'a> {
    id: &'a str,
    name: &'a str,
    national_id: &'a str,
    governorate: &'a str,
    city: &'a str,
    organization: Option<&'a str>,
    family: Option<&'a str>,
    identity: IdentityStatus,
    status: AccountStatus,
    family_size: u32,
    level: EconomicLevel,
}

fn beneficiary(seed: Seed<'_>, index: u32) -> Beneficiary {
    let created = at(1, 5 + index, 9);

    Beneficiary {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        national_id: seed.national_id.to_string(),
        phone: format!("05970000{:02}", index),
        email: None,
        address: Address {
            governorate: seed.governorate.to_string(),
            city: seed.city.to_string(),
            district: "الحي الشرقي".to_string(),
            street: format!("شارع {}", index + 1),
        },
        family_id: seed.family.map(str::to_string),
        organization_id: seed.organization.map(str::to_string),
        identity_status: seed.identity,
        status: seed.status,
        profile: SocialProfile {
            family_size: seed.family_size,
            monthly_income: None,
            economic_level: seed.level,
            special_needs: None,
        },
        documents: vec![Document {
            id: format!("doc-{}", seed.id),
            name: "صورة الهوية".to_string(),
            kind: "national_id".to_string(),
            url: format!("/documents/{}/national-id.jpg", seed.id),
            uploaded_at: created,
        }],
        created_at: created,
        updated_at: created,
    }
}

#[rustfmt::skip]
fn beneficiaries() -> Vec<Beneficiary> {
    use AccountStatus::{Active, Pending as AccountPending, Suspended};
    use EconomicLevel::{Moderate, Poor, VeryPoor};
    use IdentityStatus::{Pending, Rejected, Verified};

    let seeds = [
        Seed { id: "ben-1", name: "أحمد محمد الخالدي", national_id: "900111222", governorate: "خان يونس", city: "خان يونس", organization: Some("org-1"), family: None, identity: Verified, status: Active, family_size: 6, level: Poor },
        Seed { id: "ben-2", name: "فاطمة علي حسن", national_id: "900222333", governorate: "غزة", city: "غزة", organization: Some("org-1"), family: None, identity: Pending, status: AccountPending, family_size: 4, level: VeryPoor },
        Seed { id: "ben-3", name: "يوسف إبراهيم عودة", national_id: "900333444", governorate: "رفح", city: "رفح", organization: Some("org-1"), family: None, identity: Verified, status: Active, family_size: 8, level: VeryPoor },
        Seed { id: "ben-4", name: "مريم سالم العطار", national_id: "900444555", governorate: "الوسطى", city: "دير البلح", organization: Some("org-2"), family: None, identity: Rejected, status: Suspended, family_size: 3, level: Moderate },
        Seed { id: "ben-5", name: "عمر خليل شاهين", national_id: "900555666", governorate: "الشمال", city: "جباليا", organization: Some("org-2"), family: None, identity: Verified, status: Active, family_size: 5, level: Poor },
        Seed { id: "ben-6", name: "محمد أبو أحمد", national_id: "900666777", governorate: "خان يونس", city: "بني سهيلا", organization: None, family: Some("fam-1"), identity: Verified, status: Active, family_size: 7, level: Poor },
        Seed { id: "ben-7", name: "سارة محمد أبو أحمد", national_id: "900777888", governorate: "خان يونس", city: "بني سهيلا", organization: None, family: Some("fam-1"), identity: Pending, status: Active, family_size: 7, level: Poor },
        Seed { id: "ben-8", name: "خالد السعيد", national_id: "900888999", governorate: "رفح", city: "تل السلطان", organization: None, family: Some("fam-2"), identity: Verified, status: Active, family_size: 9, level: VeryPoor },
        Seed { id: "ben-9", name: "ليلى حمدان", national_id: "900999000", governorate: "غزة", city: "الشجاعية", organization: None, family: None, identity: Pending, status: AccountPending, family_size: 2, level: Moderate },
    ];

    seeds
        .into_iter()
        .zip(0u32..)
        .map(|(seed, index)| beneficiary(seed, index))
        .collect()
}

fn packages() -> Vec<Package> {
    use PackageStatus::{Delivered, Failed, InDelivery, Pending};

    let package = |id: &str,
                   name: &str,
                   kind: &str,
                   value: f64,
                   beneficiary: &str,
                   organization: Option<&str>,
                   status: PackageStatus,
                   day: u32| Package {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        value,
        funder: organization
            .map(|_| "تمويل ذاتي".to_string())
            .unwrap_or_else(|| "برنامج الغذاء العالمي".to_string()),
        beneficiary_id: beneficiary.to_string(),
        organization_id: organization.map(str::to_string),
        status,
        created_at: at(2, day, 8),
        delivered_at: (status == Delivered).then(|| at(2, day + 2, 14)),
        expires_at: Some(at(6, day, 0)),
    };

    vec![
        package("pkg-1", "طرد غذائي أساسي", "food", 150.0, "ben-1", Some("org-1"), Delivered, 1),
        package("pkg-2", "طرد صحي", "hygiene", 80.0, "ben-2", Some("org-1"), Pending, 2),
        package("pkg-3", "طرد غذائي عائلي", "food", 220.0, "ben-3", Some("org-1"), InDelivery, 3),
        package("pkg-4", "بطانيات شتوية", "shelter", 120.0, "ben-4", Some("org-2"), Failed, 4),
        package("pkg-5", "طرد غذائي أساسي", "food", 150.0, "ben-5", Some("org-2"), Delivered, 5),
        package("pkg-6", "طرد أدوية", "medical", 300.0, "ben-6", None, Delivered, 6),
        package("pkg-7", "طرد صحي", "hygiene", 80.0, "ben-7", None, Pending, 7),
        package("pkg-8", "طرد غذائي عائلي", "food", 220.0, "ben-8", None, InDelivery, 8),
        package("pkg-9", "كسوة أطفال", "clothing", 95.0, "ben-6", None, Pending, 9),
        // Funded by org-3 for a beneficiary it does not register itself.
        package("pkg-10", "طرد غذائي أساسي", "food", 150.0, "ben-9", Some("org-3"), Pending, 10),
    ]
}

fn tasks() -> Vec<Task> {
    use TaskStatus::{Assigned, Delivered, Failed, InProgress, Pending};

    let task = |id: &str,
                package: &str,
                beneficiary: &str,
                courier: Option<&str>,
                status: TaskStatus,
                day: u32| Task {
        id: id.to_string(),
        package_id: package.to_string(),
        beneficiary_id: beneficiary.to_string(),
        courier_id: courier.map(str::to_string),
        status,
        proof: if status == Delivered {
            DeliveryProof {
                signature_image: Some(format!("/proofs/{}/signature.png", id)),
                proof_image: Some(format!("/proofs/{}/photo.jpg", id)),
                notes: Some("تم التسليم للمستفيد شخصياً".to_string()),
            }
        } else {
            DeliveryProof::default()
        },
        failure_reason: (status == Failed).then(|| "تعذر الوصول إلى العنوان".to_string()),
        scheduled_for: Some(at(2, day + 1, 10)),
        created_at: at(2, day, 9),
        updated_at: at(2, day, 9),
    };

    vec![
        task("task-1", "pkg-1", "ben-1", Some("cour-1"), Delivered, 1),
        task("task-2", "pkg-2", "ben-2", None, Pending, 2),
        task("task-3", "pkg-3", "ben-3", Some("cour-2"), InProgress, 3),
        task("task-4", "pkg-4", "ben-4", Some("cour-3"), Failed, 4),
        task("task-5", "pkg-5", "ben-5", Some("cour-1"), Delivered, 5),
        task("task-6", "pkg-6", "ben-6", Some("cour-2"), Delivered, 6),
        task("task-7", "pkg-7", "ben-7", Some("cour-4"), Assigned, 7),
        // Courier record was removed after assignment.
        task("task-8", "pkg-8", "ben-8", Some("cour-retired"), InProgress, 8),
    ]
}

fn couriers() -> Vec<Courier> {
    let courier = |id: &str, name: &str, phone: &str, rating: f32, completed: u32, status| {
        Courier {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            rating,
            completed_tasks: completed,
            status,
        }
    };

    vec![
        courier("cour-1", "سامر الحلو", "0598111001", 4.8, 132, CourierStatus::Active),
        courier("cour-2", "رامي قديح", "0598111002", 4.5, 87, CourierStatus::Busy),
        courier("cour-3", "نادر عاشور", "0598111003", 3.9, 41, CourierStatus::Offline),
        courier("cour-4", "وائل الشاعر", "0598111004", 4.2, 63, CourierStatus::Active),
    ]
}

#[rustfmt::skip]
fn templates() -> Vec<PackageTemplate> {
    let template = |id: &str,
                    organization: &str,
                    name: &str,
                    contents: &[&str],
                    weight_kg: f32,
                    cost: f64,
                    usage_count: u32| PackageTemplate {
        id: id.to_string(),
        organization_id: organization.to_string(),
        name: name.to_string(),
        contents: contents.iter().map(|c| c.to_string()).collect(),
        weight_kg,
        cost,
        usage_count,
    };

    vec![
        template("tpl-1", "org-1", "طرد غذائي أساسي", &["أرز 5 كغ", "زيت 2 لتر", "سكر 2 كغ", "عدس 1 كغ"], 12.0, 150.0, 48),
        template("tpl-2", "org-1", "طرد صحي", &["صابون", "معجون أسنان", "فوط صحية"], 3.5, 80.0, 21),
        template("tpl-3", "org-2", "بطانيات شتوية", &["بطانية صوف ×2", "وسادة"], 6.0, 120.0, 15),
        template("tpl-4", "org-3", "طرد غذائي عائلي", &["أرز 10 كغ", "طحين 10 كغ", "زيت 3 لتر", "معلبات"], 25.0, 220.0, 9),
    ]
}

fn alerts() -> Vec<Alert> {
    let alert = |id: &str,
                 kind: AlertKind,
                 priority: AlertPriority,
                 title: &str,
                 related: EntityRef,
                 is_read: bool,
                 day: u32| Alert {
        id: id.to_string(),
        kind,
        priority,
        title: title.to_string(),
        message: format!("{} ({})", title, related.id),
        is_read,
        related,
        created_at: at(3, day, 12),
    };
    let ben = |id: &str| EntityRef::new(EntityKind::Beneficiary, id);

    vec![
        alert("alert-1", AlertKind::Delayed, AlertPriority::Medium, "تأخر تسليم طرد", ben("ben-3"), false, 1),
        alert("alert-2", AlertKind::Failed, AlertPriority::High, "فشل تسليم طرد", ben("ben-4"), false, 2),
        alert("alert-3", AlertKind::Urgent, AlertPriority::Critical, "حالة طبية عاجلة", ben("ben-6"), false, 3),
        alert("alert-4", AlertKind::Expired, AlertPriority::Low, "انتهاء صلاحية طرد", ben("ben-7"), true, 4),
        alert("alert-5", AlertKind::Delayed, AlertPriority::Medium, "تأخر تسليم طرد", ben("ben-8"), false, 5),
        alert(
            "alert-6",
            AlertKind::Failed,
            AlertPriority::High,
            "مهمة دون مندوب متاح",
            EntityRef::new(EntityKind::Task, "task-8"),
            false,
            6,
        ),
    ]
}

fn users() -> Vec<SystemUser> {
    let user = |id: &str, name: &str, email: &str, role: Role, association: Option<Association>| {
        SystemUser {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            association,
            status: AccountStatus::Active,
            last_login: None,
        }
    };

    vec![
        user("user-1", "مدير النظام", "admin@aidhub.org", Role::Admin, None),
        user(
            "user-2",
            "منسق الهلال الأحمر",
            "redcrescent@aidhub.org",
            Role::Organization,
            Some(Association::Organization("org-1".to_string())),
        ),
        user(
            "user-3",
            "منسق مؤسسة الإغاثة",
            "relief@aidhub.org",
            Role::Organization,
            Some(Association::Organization("org-2".to_string())),
        ),
        user(
            "user-4",
            "محمد أبو أحمد",
            "abuahmad@aidhub.org",
            Role::Family,
            Some(Association::Family("fam-1".to_string())),
        ),
        SystemUser {
            status: AccountStatus::Suspended,
            ..user(
                "user-5",
                "حساب موقوف",
                "suspended@aidhub.org",
                Role::Family,
                Some(Association::Family("fam-3".to_string())),
            )
        },
    ]
}
