use crate::{SubTopicEntry, TopicEntry};

pub const TOPICS: &[TopicEntry] = &[
    TopicEntry {
        id: "broadband",
        label: "Broadband",
        sub_topics: BROADBAND,
    },
    TopicEntry {
        id: "cord_cutting",
        label: "Cord Cutting",
        sub_topics: CORD_CUTTING,
    },
    TopicEntry {
        id: "mobile",
        label: "Mobile",
        sub_topics: MOBILE,
    },
];

const BROADBAND: &[SubTopicEntry] = &[
    SubTopicEntry {
        id: "provider_comparison",
        label: "Provider Comparison",
        keywords: &[
            "Spectrum Internet",
            "Xfinity",
            "AT&T Fiber",
            "T-Mobile Home Internet",
            "Verizon 5G Home",
        ],
    },
    SubTopicEntry {
        id: "switching_intent",
        label: "Switching Intent",
        keywords: &[
            "Switch Internet Provider",
            "Cancel Spectrum",
            "Best Internet Provider",
            "Internet Providers Near Me",
            "Cheapest Internet",
        ],
    },
    SubTopicEntry {
        id: "speed_reliability",
        label: "Speed & Reliability",
        keywords: &[
            "Internet Speed Test",
            "Internet Outage",
            "Fastest Internet Provider",
            "Fiber vs Cable",
            "Best Home Internet",
        ],
    },
    SubTopicEntry {
        id: "pricing",
        label: "Pricing",
        keywords: &[
            "Cheap Internet",
            "Internet Plans",
            "Unlimited Internet",
            "Internet Deals",
            "Low Income Internet",
        ],
    },
    SubTopicEntry {
        id: "new_technology",
        label: "New Technology",
        keywords: &[
            "Starlink",
            "5G Home Internet",
            "Fiber Internet",
            "Fixed Wireless",
            "Satellite Internet",
        ],
    },
];

const CORD_CUTTING: &[SubTopicEntry] = &[
    SubTopicEntry {
        id: "live_tv",
        label: "Live TV Streaming",
        keywords: &[
            "YouTube TV",
            "Hulu Live TV",
            "Sling TV",
            "FuboTV",
            "DirecTV Stream",
        ],
    },
    SubTopicEntry {
        id: "on_demand",
        label: "On-Demand",
        keywords: &[
            "Netflix",
            "Disney Plus",
            "Max",
            "Amazon Prime Video",
            "Apple TV Plus",
        ],
    },
    SubTopicEntry {
        id: "switching_intent",
        label: "Switching Intent",
        keywords: &[
            "Cancel Cable",
            "Cancel Spectrum TV",
            "Cut the Cord",
            "Cable Alternative",
            "Drop Cable",
        ],
    },
    SubTopicEntry {
        id: "sports",
        label: "Sports Streaming",
        keywords: &[
            "ESPN Plus",
            "NFL Streaming",
            "NBA League Pass",
            "Sports Streaming",
            "Watch NFL Without Cable",
        ],
    },
    SubTopicEntry {
        id: "devices",
        label: "Devices",
        keywords: &[
            "Roku",
            "Fire TV Stick",
            "Apple TV",
            "Google Chromecast",
            "Smart TV",
        ],
    },
];

const MOBILE: &[SubTopicEntry] = &[
    SubTopicEntry {
        id: "carrier_comparison",
        label: "Carrier Comparison",
        keywords: &[
            "Spectrum Mobile",
            "Verizon",
            "AT&T",
            "T-Mobile",
            "Xfinity Mobile",
        ],
    },
    SubTopicEntry {
        id: "switching_intent",
        label: "Switching Intent",
        keywords: &[
            "Switch Phone Carrier",
            "Cancel Verizon",
            "Best Cell Phone Plan",
            "Cheapest Phone Plan",
            "BYOD",
        ],
    },
    SubTopicEntry {
        id: "coverage",
        label: "Coverage",
        keywords: &[
            "5G Coverage Map",
            "Best Coverage Area",
            "T-Mobile Coverage",
            "Verizon Coverage",
            "AT&T Coverage",
        ],
    },
    SubTopicEntry {
        id: "pricing",
        label: "Pricing",
        keywords: &[
            "Unlimited Data Plan",
            "Family Phone Plan",
            "Prepaid Phone Plan",
            "Phone Plan Deals",
            "Cheap Unlimited",
        ],
    },
    SubTopicEntry {
        id: "bundling",
        label: "Bundling",
        keywords: &[
            "Internet and Phone Bundle",
            "Spectrum Bundle",
            "Cable and Mobile Bundle",
            "Home Internet Bundle",
            "Wireless Bundle",
        ],
    },
];
