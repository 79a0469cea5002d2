//! 首页（不含价格）静态目录数据。
//!
//! 数据为编译期常量，与请求内容无关，每次返回完全相同的结构。
//! `products` 第一项使用 `SubLabel`，其余使用 `Sublabel`：现有客户端可能依赖该拼写，保持原样。

use serde::Serialize;

/// 图片资源地址前缀。
pub const ICON_BASE_URL: &str = "http://devapiv4.dealsdray.com/icons/";

// concat! 只接受字面量，前缀须与 ICON_BASE_URL 保持一致。
macro_rules! icon {
    ($name:literal) => {
        concat!("http://devapiv4.dealsdray.com/icons/", $name)
    };
}

/// 首页数据。字段名即客户端读取的 key。
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub banner_one: &'static [Banner],
    pub category: &'static [Category],
    pub products: &'static [ProductTile],
    pub banner_two: &'static [Banner],
    pub new_arrivals: &'static [BrandedTile],
    pub banner_three: &'static [Banner],
    pub categories_listing: &'static [OfferTile],
    pub top_brands: &'static [IconTile],
    pub brand_listing: &'static [BrandedTile],
    pub top_selling_products: &'static [LabeledIcon],
    pub featured_laptop: &'static [PricedTile],
    pub upcoming_laptops: &'static [IconTile],
    pub unboxed_deals: &'static [OfferTile],
    pub my_browsing_history: &'static [BrandedTile],
}

#[derive(Debug, Serialize)]
pub struct Banner {
    pub banner: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Category {
    pub label: &'static str,
    pub icon: &'static str,
}

/// 商品卡片。副标题 key 有两种拼写，二者只会出现一个。
#[derive(Debug, Serialize)]
pub struct ProductTile {
    pub icon: &'static str,
    pub offer: &'static str,
    pub label: &'static str,
    #[serde(rename = "SubLabel", skip_serializing_if = "Option::is_none")]
    pub sub_label: Option<&'static str>,
    #[serde(rename = "Sublabel", skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandedTile {
    pub icon: &'static str,
    pub offer: &'static str,
    pub brand_icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OfferTile {
    pub icon: &'static str,
    pub offer: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct IconTile {
    pub icon: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LabeledIcon {
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedTile {
    pub icon: &'static str,
    pub brand_icon: &'static str,
    pub label: &'static str,
    pub price: &'static str,
}

const REALME_2_PRO: BrandedTile = BrandedTile {
    icon: icon!("Image 4.png"),
    offer: "21%",
    brand_icon: icon!("Image -107.png"),
    label: "Realme 2 Pro(Black,Sea,64 GB)",
};

const REALME_3I: BrandedTile = BrandedTile {
    icon: icon!("Image -41.png"),
    offer: "21%",
    brand_icon: icon!("Image -107.png"),
    label: "Realme 3i (Diamond Red,64 GB) (4 GB...)",
};

const NOKIA_8_1: OfferTile = OfferTile {
    icon: icon!("Image -70.png"),
    offer: "32%",
    label: "Nokia 8.1(iron,64 GB)",
};

const REDMI_NOTE_7S: OfferTile = OfferTile {
    icon: icon!("Image 7.png"),
    offer: "14%",
    label: "Redmin Note 7s (Sapphire Blue 64 GB)",
};

static HOME_PAGE: HomePage = HomePage {
    banner_one: &[
        Banner {
            banner: icon!("banner.png"),
        },
        Banner {
            banner: icon!("banner.png"),
        },
    ],
    category: &[
        Category {
            label: "Mobile",
            icon: icon!("cat_mobile.png"),
        },
        Category {
            label: "Laptop",
            icon: icon!("cat_lap.png"),
        },
        Category {
            label: "Camera",
            icon: icon!("cat_camera.png"),
        },
        Category {
            label: "LED",
            icon: icon!("cat_led.png"),
        },
    ],
    products: &[
        ProductTile {
            icon: icon!("Image -75.png"),
            offer: "36%",
            label: "FINICKY-WORLD V380",
            sub_label: Some("Wireless HD IP Security"),
            sublabel: None,
        },
        ProductTile {
            icon: icon!("Image -79.png"),
            offer: "32%",
            label: "MI LED TV 4A PRO 108 CM",
            sub_label: None,
            sublabel: Some("(43) Full HD Android TV"),
        },
        ProductTile {
            icon: icon!("Image -76.png"),
            offer: "12%",
            label: "HP 245 7th GEN AMD",
            sub_label: None,
            sublabel: Some("(4GB/1TB/DOS)G6"),
        },
        ProductTile {
            icon: icon!("Image -80.png"),
            offer: "45%",
            label: "MI Redmi 5 (Blue,4GB)",
            sub_label: None,
            sublabel: Some("RAM,64GB Storage"),
        },
    ],
    banner_two: &[Banner {
        banner: icon!("discount_banner.png"),
    }],
    new_arrivals: &[REALME_2_PRO, REALME_3I],
    banner_three: &[
        Banner {
            banner: icon!("Image -97.png"),
        },
        Banner {
            banner: icon!("Image -99.png"),
        },
    ],
    categories_listing: &[NOKIA_8_1, REDMI_NOTE_7S],
    top_brands: &[IconTile {
        icon: icon!("brand_bg.png"),
    }],
    brand_listing: &[REALME_2_PRO, REALME_3I],
    top_selling_products: &[
        LabeledIcon {
            icon: icon!("Image 26.png"),
            label: "Moniters",
        },
        LabeledIcon {
            icon: icon!("Image 27.png"),
            label: "Printers",
        },
        LabeledIcon {
            icon: icon!("Image 28.png"),
            label: "Cameras",
        },
        LabeledIcon {
            icon: icon!("Image 29.png"),
            label: "LED Bulb",
        },
    ],
    featured_laptop: &[
        PricedTile {
            icon: icon!("Image -133.png"),
            brand_icon: icon!("Image -132.png"),
            label: "Apple MacBook Air Core i5th Gen - (8 GB/128 GB SSD/Mac OS...)",
            price: "284,999",
        },
        PricedTile {
            icon: icon!("Image 23.png"),
            brand_icon: icon!("Image -33.png"),
            label: "HP 14G APU Dual Core A6 -(4 GB/256 GB SSD/WINDOWS 10)...",
            price: "284,999",
        },
    ],
    upcoming_laptops: &[
        IconTile {
            icon: icon!("great_deals.png"),
        },
        IconTile {
            icon: icon!("Image -124.png"),
        },
        IconTile {
            icon: icon!("Image -125.png"),
        },
    ],
    unboxed_deals: &[NOKIA_8_1, REDMI_NOTE_7S],
    my_browsing_history: &[REALME_2_PRO, REALME_3I],
};

/// 首页静态数据。
pub fn home_page() -> &'static HomePage {
    &HOME_PAGE
}
