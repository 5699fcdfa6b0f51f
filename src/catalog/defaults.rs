//! Built-in British Columbia catalogs used when a host supplies none.

use super::records::{FactRecord, HighlightFact, Region, TimelineEvent, TriviaQuestion};
use super::tags::{Difficulty, EventCategory, FactCategory};

fn fact(
    id: &str,
    title: &str,
    description: &str,
    category: FactCategory,
    image_url: &str,
    detailed_info: &str,
    source: &str,
) -> FactRecord {
    FactRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        image_url: image_url.to_string(),
        detailed_info: Some(detailed_info.to_string()),
        source: Some(source.to_string()),
    }
}

pub fn facts() -> Vec<FactRecord> {
    vec![
        fact(
            "1",
            "Black Bears",
            "BC is home to approximately 120,000-160,000 black bears, the largest population in North America.",
            FactCategory::Wildlife,
            "/images/black-bear.jpg",
            "Black bears are the most common bear species in British Columbia. They can be found in almost every region of the province, from coastal rainforests to inner mountain ranges. Despite their name, they can range in color from jet black to cinnamon brown or even white (known as Kermode bears).",
            "BC Wildlife Federation",
        ),
        fact(
            "2",
            "Rattlesnakes",
            "The Northern Pacific Rattlesnake is BC's only venomous snake species.",
            FactCategory::Wildlife,
            "/images/rattlesnake.jpg",
            "The Northern Pacific Rattlesnake (Crotalus oreganus) is the only venomous snake found in British Columbia. They're primarily found in the dry interior valleys of the southern Okanagan and Similkameen. While venomous, they generally avoid human contact and rattlesnake bites are rare in BC.",
            "BC Ministry of Environment",
        ),
        fact(
            "3",
            "California Roll Origin",
            "The California Roll was invented in Vancouver by Japanese chef Hidekazu Tojo in the 1970s.",
            FactCategory::Culture,
            "/images/california-roll.jpg",
            "Chef Hidekazu Tojo created the now-famous California Roll in Vancouver in the 1970s. He inverted traditional sushi by hiding the seaweed on the inside and using avocado, crab, and cucumber to appeal to Western customers who were hesitant to eat raw fish and seaweed. This innovation helped popularize sushi across North America.",
            "Google",
        ),
        fact(
            "4",
            "Greenpeace Founded",
            "The global environmental organization Greenpeace was founded in Vancouver in 1971.",
            FactCategory::Culture,
            "/images/greenpeace.jpg",
            "Greenpeace was founded in Vancouver, British Columbia, in 1971 by a small group of activists protesting nuclear testing near Alaska. What began as a small grassroots movement has grown into one of the largest and most influential environmental organizations in the world, now operating in more than 55 countries.",
            "Google",
        ),
        fact(
            "5",
            "Grizzly Sanctuary",
            "The Khutzeymateen Grizzly Bear Sanctuary was the first area in Canada protected specifically for grizzly bears.",
            FactCategory::Culture,
            "/images/grizzly-sanctuary.jpg",
            "Established in 1994, the Khutzeymateen (K'tzim-a-deen) Grizzly Bear Sanctuary is Canada's first area to be protected specifically for grizzly bears and their habitat. Located near Prince Rupert in northern BC, this remote sanctuary spans 44,300 hectares and is home to approximately 50 grizzlies, offering visitors a rare opportunity to observe these magnificent animals in their natural habitat.",
            "Google",
        ),
        fact(
            "6",
            "Bats",
            "BC is home to 16 bat species, including the rare Spotted Bat.",
            FactCategory::Wildlife,
            "/images/bats.jpg",
            "British Columbia hosts 16 of Canada's 19 bat species. These include the Little Brown Myotis, Big Brown Bat, and the unique Spotted Bat with its distinctive black and white coloration. BC's bat populations play a crucial ecological role by consuming vast quantities of insects including many agricultural pests.",
            "BC Bat Action Team",
        ),
        fact(
            "7",
            "Rats",
            "Norway and Black rats were introduced to BC through shipping in the late 1800s.",
            FactCategory::Wildlife,
            "/images/rats.jpg",
            "Both Norway rats and Black rats are non-native species to British Columbia, arriving via ships during European colonization. They've become established in urban areas and some islands along the coast. These resourceful rodents have significant ecological impacts, particularly on seabird colonies where they prey on eggs and nestlings.",
            "BC Invasive Species Council",
        ),
        fact(
            "8",
            "Cougars",
            "BC has the highest concentration of mountain lions (cougars) in North America.",
            FactCategory::Wildlife,
            "/images/cougar.jpg",
            "British Columbia is home to approximately 4,000-6,000 cougars, the highest population density in North America. These elusive big cats, also known as mountain lions or pumas, can be found throughout the province but are most common on Vancouver Island, which has the highest concentration of cougars in the world.",
            "BC Conservation Foundation",
        ),
        fact(
            "9",
            "World's Largest Hockey Stick",
            "Duncan, BC, is home to the world's largest hockey stick, measuring 205 feet long.",
            FactCategory::Culture,
            "/images/hockey-stick.jpg",
            "Originally built for the 1986 Expo in Vancouver, the world's largest hockey stick now resides in Duncan, BC. Measuring 205 feet (62.4 meters) long and weighing 61,000 pounds (28,000 kg), this giant Douglas fir hockey stick and puck is recognized by the Guinness Book of World Records. It's displayed at the Cowichan Community Centre and has become a popular tourist attraction.",
            "Google",
        ),
        fact(
            "10",
            "Mildest Climate in Canada",
            "Victoria, BC, enjoys the mildest climate in Canada with the lowest average annual snowfall.",
            FactCategory::Culture,
            "/images/victoria-climate.jpg",
            "Victoria, British Columbia's capital city, boasts the mildest climate in Canada. With an average annual temperature of 11°C (52°F), Victoria experiences warm, dry summers and mild, wet winters. The city receives only about 26 cm (10 inches) of snow annually and over 2,000 hours of sunshine each year, making it a haven for gardeners and outdoor enthusiasts who enjoy a year-round growing season and outdoor activities.",
            "Google",
        ),
    ]
}

fn event(
    id: &str,
    year: i32,
    title: &str,
    description: &str,
    image_url: &str,
    category: EventCategory,
) -> TimelineEvent {
    TimelineEvent {
        id: id.to_string(),
        year,
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        category,
    }
}

pub fn timeline_events() -> Vec<TimelineEvent> {
    vec![
        event(
            "1",
            1778,
            "Captain James Cook Arrives",
            "Captain James Cook becomes the first European to set foot on what is now British Columbia, landing at Nootka Sound on Vancouver Island.",
            "https://images.unsplash.com/photo-1534190239940-9ba8944ea261?w=800&q=80",
            EventCategory::Settlement,
        ),
        event(
            "2",
            1858,
            "Fraser Canyon Gold Rush",
            "The Fraser Canyon Gold Rush brings approximately 30,000 prospectors to British Columbia, leading to the establishment of the Colony of British Columbia.",
            "https://images.unsplash.com/photo-1610375461246-83df859d849d?w=800&q=80",
            EventCategory::Settlement,
        ),
        event(
            "3",
            1871,
            "BC Joins Confederation",
            "British Columbia joins the Canadian Confederation as its sixth province, with the promise of a transcontinental railway.",
            "https://images.unsplash.com/photo-1582213782179-e0d53f98f2ca?w=800&q=80",
            EventCategory::Politics,
        ),
        event(
            "4",
            1885,
            "Canadian Pacific Railway Completed",
            "The last spike of the Canadian Pacific Railway is driven at Craigellachie, BC, connecting British Columbia to the rest of Canada by rail.",
            "https://images.unsplash.com/photo-1474487548417-781cb71495f3?w=800&q=80",
            EventCategory::Settlement,
        ),
        event(
            "5",
            1915,
            "Women Gain Right to Vote",
            "Women in British Columbia gain the right to vote in provincial elections, a significant milestone in the women's suffrage movement.",
            "https://images.unsplash.com/photo-1494172961521-33799ddd43a5?w=800&q=80",
            EventCategory::Politics,
        ),
        event(
            "6",
            1986,
            "Expo 86 World Fair",
            "Vancouver hosts Expo 86, a World's Fair that puts British Columbia on the international stage and transforms the city's landscape.",
            "https://images.unsplash.com/photo-1558441440-d4111d18d48f?w=800&q=80",
            EventCategory::Culture,
        ),
        event(
            "7",
            2010,
            "Vancouver Winter Olympics",
            "Vancouver and Whistler host the 2010 Winter Olympics and Paralympics, showcasing British Columbia to the world.",
            "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=800&q=80",
            EventCategory::Culture,
        ),
    ]
}

fn region(id: &str, name: &str, geometry: &str, facts: &[&str], images: &[&str]) -> Region {
    Region {
        id: id.to_string(),
        name: name.to_string(),
        geometry: geometry.to_string(),
        facts: facts.iter().map(|f| f.to_string()).collect(),
        images: images.iter().map(|i| i.to_string()).collect(),
    }
}

pub fn regions() -> Vec<Region> {
    vec![
        region(
            "vancouver-island",
            "Vancouver Island",
            "M40,260 L95,230 L130,270 L110,320 L55,310 Z",
            &[
                "The capital of British Columbia is Victoria, located on Vancouver Island.",
                "Vancouver Island has the highest concentration of cougars in the world.",
            ],
            &["/images/regions/vancouver-island.jpg"],
        ),
        region(
            "lower-mainland",
            "Lower Mainland",
            "M140,250 L200,240 L215,280 L150,290 Z",
            &[
                "Vancouver is the largest city and a major cultural and economic center.",
                "Vancouver hosted Expo 86 and the 2010 Winter Olympics.",
            ],
            &["/images/regions/lower-mainland.jpg"],
        ),
        region(
            "okanagan",
            "Thompson-Okanagan",
            "M215,200 L290,190 L300,280 L220,285 Z",
            &[
                "The dry interior valleys are home to BC's only venomous snake.",
                "The Okanagan is BC's largest wine-producing region.",
            ],
            &["/images/regions/okanagan.jpg"],
        ),
        region(
            "kootenays",
            "Kootenay Rockies",
            "M300,180 L380,170 L390,280 L305,285 Z",
            &["The Rocky Mountains form much of the province's eastern border."],
            &["/images/regions/kootenays.jpg"],
        ),
        region(
            "northern-bc",
            "Northern British Columbia",
            "M30,20 L380,20 L380,165 L200,180 L60,200 Z",
            &[
                "The Great Bear Rainforest is home to the rare Kermode (Spirit) bear.",
                "The Khutzeymateen near Prince Rupert was Canada's first grizzly sanctuary.",
            ],
            &["/images/regions/northern-bc.jpg"],
        ),
    ]
}

fn question(question: &str, answer: &str, difficulty: Difficulty) -> TriviaQuestion {
    TriviaQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        difficulty,
    }
}

pub fn trivia_questions() -> Vec<TriviaQuestion> {
    vec![
        question(
            "What is the capital city of British Columbia?",
            "Victoria",
            Difficulty::Easy,
        ),
        question(
            "In which year did British Columbia join Confederation?",
            "1871",
            Difficulty::Medium,
        ),
        question(
            "Which Vancouver chef is credited with inventing the California Roll?",
            "Hidekazu Tojo",
            Difficulty::Medium,
        ),
        question(
            "Where was the last spike of the Canadian Pacific Railway driven?",
            "Craigellachie",
            Difficulty::Hard,
        ),
        question(
            "Which environmental organization was founded in Vancouver in 1971?",
            "Greenpeace",
            Difficulty::Easy,
        ),
    ]
}

fn highlight(title: &str, description: &str, image_url: &str) -> HighlightFact {
    HighlightFact {
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

pub fn highlights() -> Vec<HighlightFact> {
    vec![
        highlight(
            "Spirit Bears",
            "The rare Kermode (Spirit) bear, a subspecies of black bear with white fur, is found almost exclusively in BC's Great Bear Rainforest.",
            "https://images.unsplash.com/photo-1525382455947-f319bc05fb35?w=800&q=80",
        ),
        highlight(
            "Tallest Trees",
            "BC is home to some of the tallest trees in the world, with coastal Douglas firs reaching heights of over 300 feet.",
            "https://images.unsplash.com/photo-1473448912268-2022ce9509d8?w=800&q=80",
        ),
        highlight(
            "Volcanic History",
            "The Black Tusk in Garibaldi Provincial Park is the remnant of an extinct volcano that was active about 1.3 million years ago.",
            "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?w=800&q=80",
        ),
        highlight(
            "Indigenous Heritage",
            "BC has the most diverse Indigenous population in Canada, with over 200 First Nations communities and more than 30 Indigenous languages.",
            "https://images.unsplash.com/photo-1531088009183-5ff5b7c95f91?w=800&q=80",
        ),
    ]
}
