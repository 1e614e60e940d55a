//! # Built-in Dataset
//!
//! The six-model showroom catalog the dashboard starts with when no dataset
//! file is configured. Stock-table fields (chassi, plate, color, yard,
//! new/used) are filled in so every view has data to show.

use moto_core::{Category, Condition, Motorcycle, Status};

struct Details {
    engine: &'static str,
    power: &'static str,
    weight: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    image: &'static str,
}

fn detail(bike: Motorcycle, details: Details) -> Motorcycle {
    Motorcycle {
        engine: details.engine.to_string(),
        power: details.power.to_string(),
        weight: details.weight.to_string(),
        fuel: "Gasolina".to_string(),
        description: details.description.to_string(),
        features: details.features.iter().map(|f| f.to_string()).collect(),
        image: details.image.to_string(),
        ..bike
    }
}

/// Returns the built-in catalog, ids "1" through "6".
pub fn motorcycles() -> Vec<Motorcycle> {
    vec![
        detail(
            Motorcycle::new("1", "Honda", "CBR 600RR", Category::Sport)
                .with_year(2024)
                .with_price_major(45_000)
                .with_stock(8)
                .with_sales(24)
                .with_chassi("9C2PC4010RR000101")
                .with_color("Vermelha")
                .with_patio("Matriz")
                .with_condition(Condition::New),
            Details {
                engine: "599cc",
                power: "118 CV",
                weight: "194 kg",
                description: "A Honda CBR 600RR é uma motocicleta esportiva de alta performance, ideal para quem busca velocidade e adrenalina.",
                features: &["ABS", "Controle de Tração", "Quickshifter", "Freios Brembo"],
                image: "src/assets/bike-cbr.png",
            },
        ),
        detail(
            Motorcycle::new("2", "Yamaha", "MT-07", Category::Naked)
                .with_year(2024)
                .with_price_major(38_000)
                .with_stock(12)
                .with_sales(18)
                .with_chassi("9C6RM0710RR000202")
                .with_placa("RTA2B45")
                .with_color("Azul")
                .with_patio("Filial Centro")
                .with_condition(Condition::Used),
            Details {
                engine: "689cc",
                power: "75 CV",
                weight: "182 kg",
                description: "A Yamaha MT-07 combina performance e versatilidade, perfeita para uso urbano e viagens.",
                features: &["ABS", "Display Digital", "LED", "Suspensão Ajustável"],
                image: "src/assets/bike-yamaha.png",
            },
        ),
        detail(
            Motorcycle::new("3", "Kawasaki", "Ninja 650", Category::Sport)
                .with_year(2024)
                .with_price_major(42_000)
                .with_stock(6)
                .with_sales(15)
                .with_chassi("JKAEXEE10RA000303")
                .with_color("Verde")
                .with_patio("Matriz")
                .with_condition(Condition::New),
            Details {
                engine: "649cc",
                power: "68 CV",
                weight: "193 kg",
                description: "A Kawasaki Ninja 650 oferece o equilíbrio perfeito entre performance esportiva e conforto para o dia a dia.",
                features: &["ABS", "Controle de Tração", "Farol LED", "Painel Digital"],
                image: "src/assets/bike-kawasaki.png",
            },
        ),
        detail(
            Motorcycle::new("4", "BMW", "S1000RR", Category::Sport)
                .with_year(2024)
                .with_price_major(85_000)
                .with_stock(3)
                .with_sales(12)
                .with_status(Status::Reserved)
                .with_chassi("WB10E2100RZ000404")
                .with_color("Branca")
                .with_patio("Showroom")
                .with_condition(Condition::New),
            Details {
                engine: "999cc",
                power: "210 CV",
                weight: "197 kg",
                description: "A BMW S1000RR é uma superbike de última geração com tecnologia de ponta.",
                features: &["Quickshifter", "Controle de Largada", "Modos de Pilotagem", "Suspensão Eletrônica"],
                image: "src/assets/hero-bike.png",
            },
        ),
        detail(
            Motorcycle::new("5", "Ducati", "Monster 797", Category::Naked)
                .with_year(2023)
                .with_price_major(55_000)
                .with_stock(4)
                .with_sales(8)
                .with_chassi("ZDMM400AAPB000505")
                .with_placa("QWE7C81")
                .with_color("Vermelha")
                .with_patio("Filial Centro")
                .with_condition(Condition::Used),
            Details {
                engine: "803cc",
                power: "75 CV",
                weight: "175 kg",
                description: "A Ducati Monster 797 representa a essência naked da marca italiana.",
                features: &["ABS", "Controle de Tração", "Display TFT", "Modos de Pilotagem"],
                image: "src/assets/showroom.png",
            },
        ),
        detail(
            Motorcycle::new("6", "Honda", "CB 650R", Category::Naked)
                .with_year(2024)
                .with_price_major(48_000)
                .with_stock(7)
                .with_sales(20)
                .with_chassi("9C2RH0610RR000606")
                .with_color("Preta")
                .with_patio("Matriz")
                .with_condition(Condition::New),
            Details {
                engine: "649cc",
                power: "95 CV",
                weight: "200 kg",
                description: "A Honda CB 650R é uma naked moderna com design agressivo e performance equilibrada.",
                features: &["ABS", "Display LCD", "LED", "HSTC"],
                image: "src/assets/bike-cbr.png",
            },
        ),
    ]
}
