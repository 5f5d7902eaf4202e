use serde::{Deserialize, Serialize};

/// Налоговая категория типа товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxRateType {
    Accommodation,
    AdmissionToCulturalEvents,
    AdmissionToEntertainmentEvents,
    AdmissionToSportingEvents,
    Advertising,
    AgriculturalSupplies,
    BabyFoodstuffs,
    Bikes,
    Books,
    ChildrensClothing,
    DomesticFuel,
    DomesticServices,
    EBooks,
    Foodstuffs,
    Hotels,
    Medical,
    MedicinalProducts,
    Newspapers,
    PassengerTransport,
    Pharmaceuticals,
    PropertyRenovations,
    Restaurants,
    SocialHousing,
    Standard,
    Water,
    Wine,
}

impl TaxRateType {
    /// Wire code, identical to the GraphQL enum value
    pub fn code(&self) -> &'static str {
        match self {
            TaxRateType::Accommodation => "ACCOMMODATION",
            TaxRateType::AdmissionToCulturalEvents => "ADMISSION_TO_CULTURAL_EVENTS",
            TaxRateType::AdmissionToEntertainmentEvents => "ADMISSION_TO_ENTERTAINMENT_EVENTS",
            TaxRateType::AdmissionToSportingEvents => "ADMISSION_TO_SPORTING_EVENTS",
            TaxRateType::Advertising => "ADVERTISING",
            TaxRateType::AgriculturalSupplies => "AGRICULTURAL_SUPPLIES",
            TaxRateType::BabyFoodstuffs => "BABY_FOODSTUFFS",
            TaxRateType::Bikes => "BIKES",
            TaxRateType::Books => "BOOKS",
            TaxRateType::ChildrensClothing => "CHILDRENS_CLOTHING",
            TaxRateType::DomesticFuel => "DOMESTIC_FUEL",
            TaxRateType::DomesticServices => "DOMESTIC_SERVICES",
            TaxRateType::EBooks => "E_BOOKS",
            TaxRateType::Foodstuffs => "FOODSTUFFS",
            TaxRateType::Hotels => "HOTELS",
            TaxRateType::Medical => "MEDICAL",
            TaxRateType::MedicinalProducts => "MEDICINAL_PRODUCTS",
            TaxRateType::Newspapers => "NEWSPAPERS",
            TaxRateType::PassengerTransport => "PASSENGER_TRANSPORT",
            TaxRateType::Pharmaceuticals => "PHARMACEUTICALS",
            TaxRateType::PropertyRenovations => "PROPERTY_RENOVATIONS",
            TaxRateType::Restaurants => "RESTAURANTS",
            TaxRateType::SocialHousing => "SOCIAL_HOUSING",
            TaxRateType::Standard => "STANDARD",
            TaxRateType::Water => "WATER",
            TaxRateType::Wine => "WINE",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            TaxRateType::Accommodation => "Проживание",
            TaxRateType::AdmissionToCulturalEvents => "Билеты на культурные мероприятия",
            TaxRateType::AdmissionToEntertainmentEvents => "Билеты на развлекательные мероприятия",
            TaxRateType::AdmissionToSportingEvents => "Билеты на спортивные мероприятия",
            TaxRateType::Advertising => "Реклама",
            TaxRateType::AgriculturalSupplies => "Сельхозтовары",
            TaxRateType::BabyFoodstuffs => "Детское питание",
            TaxRateType::Bikes => "Велосипеды",
            TaxRateType::Books => "Книги",
            TaxRateType::ChildrensClothing => "Детская одежда",
            TaxRateType::DomesticFuel => "Бытовое топливо",
            TaxRateType::DomesticServices => "Бытовые услуги",
            TaxRateType::EBooks => "Электронные книги",
            TaxRateType::Foodstuffs => "Продукты питания",
            TaxRateType::Hotels => "Гостиницы",
            TaxRateType::Medical => "Медицинские услуги",
            TaxRateType::MedicinalProducts => "Лекарственные средства",
            TaxRateType::Newspapers => "Газеты",
            TaxRateType::PassengerTransport => "Пассажирские перевозки",
            TaxRateType::Pharmaceuticals => "Фармацевтика",
            TaxRateType::PropertyRenovations => "Ремонт недвижимости",
            TaxRateType::Restaurants => "Рестораны",
            TaxRateType::SocialHousing => "Социальное жильё",
            TaxRateType::Standard => "Стандартная ставка",
            TaxRateType::Water => "Вода",
            TaxRateType::Wine => "Вино",
        }
    }

    /// Получить все налоговые категории
    pub fn all() -> Vec<TaxRateType> {
        vec![
            TaxRateType::Accommodation,
            TaxRateType::AdmissionToCulturalEvents,
            TaxRateType::AdmissionToEntertainmentEvents,
            TaxRateType::AdmissionToSportingEvents,
            TaxRateType::Advertising,
            TaxRateType::AgriculturalSupplies,
            TaxRateType::BabyFoodstuffs,
            TaxRateType::Bikes,
            TaxRateType::Books,
            TaxRateType::ChildrensClothing,
            TaxRateType::DomesticFuel,
            TaxRateType::DomesticServices,
            TaxRateType::EBooks,
            TaxRateType::Foodstuffs,
            TaxRateType::Hotels,
            TaxRateType::Medical,
            TaxRateType::MedicinalProducts,
            TaxRateType::Newspapers,
            TaxRateType::PassengerTransport,
            TaxRateType::Pharmaceuticals,
            TaxRateType::PropertyRenovations,
            TaxRateType::Restaurants,
            TaxRateType::SocialHousing,
            TaxRateType::Standard,
            TaxRateType::Water,
            TaxRateType::Wine,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

/// Единица измерения веса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    G,
    #[default]
    Kg,
    Lb,
    Oz,
}

impl WeightUnit {
    pub fn code(&self) -> &'static str {
        match self {
            WeightUnit::G => "G",
            WeightUnit::Kg => "KG",
            WeightUnit::Lb => "LB",
            WeightUnit::Oz => "OZ",
        }
    }

    /// Short suffix shown next to weight inputs
    pub fn symbol(&self) -> &'static str {
        match self {
            WeightUnit::G => "г",
            WeightUnit::Kg => "кг",
            WeightUnit::Lb => "lb",
            WeightUnit::Oz => "oz",
        }
    }
}

/// Kind of attribute assignment on a product type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeType {
    Product,
    Variant,
}

impl AttributeType {
    pub fn code(&self) -> &'static str {
        match self {
            AttributeType::Product => "PRODUCT",
            AttributeType::Variant => "VARIANT",
        }
    }

    /// Заголовок секции атрибутов
    pub fn section_title(&self) -> &'static str {
        match self {
            AttributeType::Product => "Атрибуты товара",
            AttributeType::Variant => "Атрибуты вариантов",
        }
    }
}
