//! Static service and provider catalogs.
//!
//! Compiled into the binary; nothing here is loaded at runtime.

use serde::Serialize;

use crate::money::{Money, Rate};

/// A bookable home service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: u32,
    pub name: &'static str,
    pub price: Rate,
    pub description: &'static str,
    pub image: &'static str,
}

/// A professional offering exactly one catalog service.
///
/// `service_name` references [`Service::name`] by value, not by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provider {
    pub id: u32,
    pub name: &'static str,
    pub service_name: &'static str,
    pub rating: f32,
    pub price: Rate,
    pub experience: &'static str,
    pub skills: &'static [&'static str],
    pub location: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        name: "Electrician",
        price: Rate::hourly(Money::inr(50)),
        description: "Wiring, lighting, and electrical repairs",
        image: "https://media.istockphoto.com/id/663984670/vector/electrician.jpg",
    },
    Service {
        id: 2,
        name: "Plumber",
        price: Rate::hourly(Money::inr(60)),
        description: "Leak repairs, pipe installation, drain cleaning",
        image: "https://static.vecteezy.com/system/resources/previews/049/167/045/plumber.jpg",
    },
    Service {
        id: 3,
        name: "Carpenter",
        price: Rate::hourly(Money::inr(45)),
        description: "Furniture repair, cabinet installation",
        image: "https://t3.ftcdn.net/jpg/01/52/72/80/carpenter.jpg",
    },
    Service {
        id: 4,
        name: "Painter",
        price: Rate::hourly(Money::inr(40)),
        description: "Interior and exterior painting",
        image: "https://i.pinimg.com/736x/b8/05/a1/painter.jpg",
    },
    Service {
        id: 5,
        name: "AC Repair",
        price: Rate::hourly(Money::inr(70)),
        description: "AC maintenance and repair services",
        image: "https://static.vecteezy.com/system/resources/previews/055/316/952/ac-repair.jpg",
    },
    Service {
        id: 6,
        name: "Cleaning",
        price: Rate::hourly(Money::inr(35)),
        description: "Home and office cleaning services",
        image: "https://img.freepik.com/premium-vector/cleaning-service.jpg",
    },
];

pub const PROVIDERS: &[Provider] = &[
    Provider {
        id: 1,
        name: "Rajesh Kumar",
        service_name: "Electrician",
        rating: 4.8,
        price: Rate::hourly(Money::inr(50)),
        experience: "8 years",
        skills: &["Wiring", "Lighting", "Circuit Repair"],
        location: "Andheri, Mumbai",
        image: "https://randomuser.me/api/portraits/men/32.jpg",
    },
    Provider {
        id: 2,
        name: "Suresh Patil",
        service_name: "Electrician",
        rating: 4.5,
        price: Rate::hourly(Money::inr(55)),
        experience: "5 years",
        skills: &["Inverter Setup", "Fan Installation"],
        location: "Bandra, Mumbai",
        image: "https://randomuser.me/api/portraits/men/45.jpg",
    },
    Provider {
        id: 3,
        name: "Amit Sharma",
        service_name: "Plumber",
        rating: 4.7,
        price: Rate::hourly(Money::inr(60)),
        experience: "10 years",
        skills: &["Leak Repair", "Pipe Fitting", "Drain Cleaning"],
        location: "Powai, Mumbai",
        image: "https://randomuser.me/api/portraits/men/51.jpg",
    },
    Provider {
        id: 4,
        name: "Vikram Singh",
        service_name: "Plumber",
        rating: 4.3,
        price: Rate::hourly(Money::inr(55)),
        experience: "4 years",
        skills: &["Bathroom Fittings", "Water Heaters"],
        location: "Thane, Mumbai",
        image: "https://randomuser.me/api/portraits/men/62.jpg",
    },
    Provider {
        id: 5,
        name: "Mohan Das",
        service_name: "Carpenter",
        rating: 4.6,
        price: Rate::hourly(Money::inr(45)),
        experience: "12 years",
        skills: &["Furniture Repair", "Cabinets", "Door Fitting"],
        location: "Dadar, Mumbai",
        image: "https://randomuser.me/api/portraits/men/70.jpg",
    },
    Provider {
        id: 6,
        name: "Priya Nair",
        service_name: "Painter",
        rating: 4.9,
        price: Rate::hourly(Money::inr(40)),
        experience: "6 years",
        skills: &["Interior", "Exterior", "Texture Finish"],
        location: "Goregaon, Mumbai",
        image: "https://randomuser.me/api/portraits/women/44.jpg",
    },
    Provider {
        id: 7,
        name: "Imran Khan",
        service_name: "AC Repair",
        rating: 4.4,
        price: Rate::hourly(Money::inr(70)),
        experience: "7 years",
        skills: &["Split AC", "Gas Refill", "Servicing"],
        location: "Malad, Mumbai",
        image: "https://randomuser.me/api/portraits/men/81.jpg",
    },
    Provider {
        id: 8,
        name: "Sunita Rao",
        service_name: "Cleaning",
        rating: 4.7,
        price: Rate::hourly(Money::inr(35)),
        experience: "3 years",
        skills: &["Deep Cleaning", "Kitchen", "Sofa Shampoo"],
        location: "Chembur, Mumbai",
        image: "https://randomuser.me/api/portraits/women/65.jpg",
    },
];

/// Providers whose `service_name` equals `service_name` exactly.
///
/// Comparison is case-sensitive with no normalization; an unknown name yields
/// an empty list.
pub fn providers_for_service(service_name: &str) -> Vec<&'static Provider> {
    PROVIDERS
        .iter()
        .filter(|p| p.service_name == service_name)
        .collect()
}

pub fn find_service(id: u32) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn find_provider(id: u32) -> Option<&'static Provider> {
    PROVIDERS.iter().find(|p| p.id == id)
}
