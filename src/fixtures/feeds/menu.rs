// fixtures/feeds/menu.rs
//
// A small restaurant menu across three categories:
// 1 = Pizzas, 2 = Pollos, 3 = Bebidas.
// Category 2 appears before category 3 but after the first pizza, so the
// first-seen category order is [1, 2, 3].

use crate::fixtures::TestFeed;

pub struct MenuFeed;

impl TestFeed for MenuFeed {
    fn feed_json() -> &'static str {
        r#"[
            {
                "id": 1,
                "id_restaurante": 10,
                "id_categoria": 1,
                "nombre": "Pizza Americana",
                "descripcion": "Jamón y queso mozzarella",
                "precio": "25.50",
                "imagen": "https://cdn.example.com/pizza-americana.png",
                "disponible": true,
                "destacado": true
            },
            {
                "id": 2,
                "id_restaurante": 10,
                "id_categoria": 2,
                "nombre": "Pollo a la Brasa",
                "descripcion": "Un cuarto de pollo con papas fritas",
                "precio": "45.00",
                "imagen": null,
                "disponible": true,
                "destacado": false
            },
            {
                "id": 3,
                "id_restaurante": 10,
                "id_categoria": 1,
                "nombre": "Pizza Hawaiana",
                "descripcion": "Jamón y piña",
                "precio": "27.90",
                "imagen": null,
                "disponible": true,
                "destacado": false
            },
            {
                "id": 4,
                "id_restaurante": 11,
                "id_categoria": 3,
                "nombre": "Chicha Morada",
                "descripcion": "Jarra de un litro",
                "precio": "8.00",
                "imagen": null,
                "disponible": true,
                "destacado": false
            },
            {
                "id": 5,
                "id_restaurante": 11,
                "id_categoria": 2,
                "nombre": "Alitas BBQ",
                "descripcion": "Seis alitas de POLLO en salsa barbacoa",
                "precio": "18.50",
                "imagen": null,
                "disponible": false,
                "destacado": true
            },
            {
                "id": 6,
                "id_restaurante": 11,
                "id_categoria": 3,
                "nombre": "Limonada Frozen",
                "descripcion": "Limón y hierbabuena",
                "precio": "9.90",
                "imagen": null,
                "disponible": true,
                "destacado": false
            }
        ]"#
    }
}

/// The two-product feed from the category filter scenario
pub struct TwoCategoryFeed;

impl TestFeed for TwoCategoryFeed {
    fn feed_json() -> &'static str {
        r#"[
            {"id": 1, "id_restaurante": 1, "id_categoria": 1, "nombre": "Combo Uno", "descripcion": "", "precio": "10.00"},
            {"id": 2, "id_restaurante": 1, "id_categoria": 2, "nombre": "Combo Dos", "descripcion": "", "precio": "20.00"}
        ]"#
    }
}
