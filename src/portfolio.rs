//! The portfolio document as served by the backend, and its normalised form.
//!
//! Every wire field is optional. [`PortfolioDocument::normalize`] turns missing lists into empty lists and
//! missing strings into empty strings so rendering needs no inline fallbacks.
//!
//! Reading is lenient below the top level: numbers and booleans are accepted as text, a section of the wrong
//! shape reads as absent, and unreadable list entries are dropped. One odd cell never costs the whole document.

use crate::error::FetchError;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::any::type_name;
use tracing::warn;

/// The document exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioDocument {
	#[serde(deserialize_with = "lenient")]
	pub profile: Option<ProfileDoc>,
	#[serde(deserialize_with = "lenient")]
	pub skills: Option<SkillsDoc>,
	#[serde(deserialize_with = "lenient_list")]
	pub careers: Option<Vec<CareerDoc>>,
	#[serde(deserialize_with = "lenient_list")]
	pub links: Option<Vec<LinkDoc>>,
	#[serde(deserialize_with = "lenient_list")]
	pub hobbies: Option<Vec<HobbyDoc>>,
	#[serde(alias = "projects", deserialize_with = "lenient_list")]
	pub works: Option<Vec<WorkDoc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileDoc {
	#[serde(deserialize_with = "lenient_text")]
	pub name: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub title: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub summary: Option<String>,
	#[serde(deserialize_with = "lenient")]
	pub contacts: Option<ContactsDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactsDoc {
	#[serde(deserialize_with = "lenient_text")]
	pub email: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub github: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub linkedin: Option<String>,
}

/// Skills come either as a flat list, as a list of categories, or as a category → items mapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SkillsDoc {
	Flat(Vec<String>),
	Groups(Vec<SkillGroupDoc>),
	Categorized(Map<String, Value>),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillGroupDoc {
	#[serde(alias = "name", deserialize_with = "lenient_text")]
	pub category: Option<String>,
	#[serde(deserialize_with = "lenient")]
	pub items: Option<Tags>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CareerDoc {
	#[serde(deserialize_with = "lenient_text")]
	pub period: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub title: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub industry: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub description: Option<String>,
	#[serde(deserialize_with = "lenient")]
	pub languages: Option<Tags>,
	#[serde(deserialize_with = "lenient")]
	pub tools: Option<Tags>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkDoc {
	#[serde(deserialize_with = "lenient_text")]
	pub title: Option<String>,
	#[serde(alias = "url", deserialize_with = "lenient_text")]
	pub href: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub desc: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HobbyDoc {
	Name(String),
	Detailed {
		#[serde(default, deserialize_with = "lenient_text")]
		title: Option<String>,
		#[serde(default, deserialize_with = "lenient_text")]
		desc: Option<String>,
		#[serde(default, deserialize_with = "lenient_text")]
		image: Option<String>,
	},
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorkDoc {
	#[serde(deserialize_with = "lenient_text")]
	pub title: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub desc: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub live: Option<String>,
	#[serde(deserialize_with = "lenient_text")]
	pub code: Option<String>,
}

/// A tag list: the flat-file backend stores these as one comma separated cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Tags {
	List(Vec<String>),
	Joined(String),
}

impl Tags {
	fn normalize(self) -> Vec<String> {
		let items: Vec<String> = match self {
			Tags::List(items) => items,
			Tags::Joined(joined) => joined.split(',').map(str::to_owned).collect(),
		};
		items.into_iter().map(|item| item.trim().to_owned()).filter(|item| !item.is_empty()).collect()
	}
}

impl PortfolioDocument {
	/// Parses a response body.
	///
	/// # Errors
	///
	/// [`FetchError::Decode`] iff `text` is not a JSON object.
	pub fn from_json(text: &str) -> Result<Self, FetchError> {
		let value: Value = serde_json::from_str(text)?;
		if !value.is_object() {
			return Err(FetchError::Decode(format!("expected a JSON object, found {}", kind(&value))));
		}
		Ok(serde_json::from_value(value)?)
	}

	#[must_use]
	pub fn normalize(self) -> Portfolio {
		Portfolio {
			profile: self.profile.map(ProfileDoc::normalize),
			skills: self.skills.map_or_else(Skills::default, SkillsDoc::normalize),
			careers: self.careers.unwrap_or_default().into_iter().map(CareerDoc::normalize).filter(|career| *career != Career::default()).collect(),
			links: self.links.unwrap_or_default().into_iter().map(LinkDoc::normalize).filter(|link| *link != Link::default()).collect(),
			hobbies: self.hobbies.unwrap_or_default().into_iter().map(HobbyDoc::normalize).filter(|hobby| *hobby != Hobby::default()).collect(),
			works: self.works.unwrap_or_default().into_iter().map(WorkDoc::normalize).filter(|work| *work != Work::default()).collect(),
		}
	}
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Text that may also arrive as a number or boolean, as spreadsheet cells often do.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
	Ok(match Value::deserialize(deserializer)? {
		Value::Null => None,
		Value::String(text) => Some(text),
		Value::Number(number) => Some(number.to_string()),
		Value::Bool(flag) => Some(flag.to_string()),
		other => {
			warn!("Ignoring {} where text was expected.", kind(&other));
			None
		}
	})
}

/// A nested value that reads as absent if it has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let value = Value::deserialize(deserializer)?;
	if value.is_null() {
		return Ok(None);
	}
	let found = kind(&value);
	match serde_json::from_value(value) {
		Ok(value) => Ok(Some(value)),
		Err(_) => {
			warn!("Ignoring {} where {} was expected.", found, type_name::<T>());
			Ok(None)
		}
	}
}

/// A list whose unreadable entries are dropped. Anything but a list reads as absent.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let items = match Value::deserialize(deserializer)? {
		Value::Null => return Ok(None),
		Value::Array(items) => items,
		other => {
			warn!("Ignoring {} where a list of {} was expected.", kind(&other), type_name::<T>());
			return Ok(None);
		}
	};
	let total = items.len();
	let kept: Vec<T> = items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect();
	if kept.len() < total {
		warn!("Dropped {} unreadable {} entries.", total - kept.len(), type_name::<T>());
	}
	Ok(Some(kept))
}

fn text(value: Option<String>) -> String {
	value.map(|value| value.trim().to_owned()).unwrap_or_default()
}

impl ProfileDoc {
	fn normalize(self) -> Profile {
		let contacts = self.contacts.unwrap_or_default();
		Profile {
			name: text(self.name),
			title: text(self.title),
			summary: text(self.summary),
			contacts: Contacts {
				email: text(contacts.email),
				github: text(contacts.github),
				linkedin: text(contacts.linkedin),
			},
		}
	}
}

impl SkillsDoc {
	fn normalize(self) -> Skills {
		match self {
			SkillsDoc::Flat(items) => Skills::Flat(Tags::List(items).normalize()),
			SkillsDoc::Groups(groups) => Skills::Categorized(
				groups
					.into_iter()
					.map(|group| SkillGroup {
						category: text(group.category),
						items: group.items.map(Tags::normalize).unwrap_or_default(),
					})
					.filter(|group| !group.category.is_empty() || !group.items.is_empty())
					.collect(),
			),
			SkillsDoc::Categorized(map) => Skills::Categorized(
				map.into_iter()
					.map(|(category, items)| SkillGroup {
						category: category.trim().to_owned(),
						items: match serde_json::from_value::<Tags>(items) {
							Ok(tags) => tags.normalize(),
							Err(_) => Vec::new(),
						},
					})
					.collect(),
			),
		}
	}
}

impl CareerDoc {
	fn normalize(self) -> Career {
		Career {
			period: text(self.period),
			title: text(self.title),
			industry: text(self.industry),
			description: text(self.description),
			languages: self.languages.map(Tags::normalize).unwrap_or_default(),
			tools: self.tools.map(Tags::normalize).unwrap_or_default(),
		}
	}
}

impl LinkDoc {
	fn normalize(self) -> Link {
		Link {
			title: text(self.title),
			href: text(self.href),
			desc: text(self.desc),
			image: text(self.image),
		}
	}
}

impl HobbyDoc {
	fn normalize(self) -> Hobby {
		match self {
			HobbyDoc::Name(title) => Hobby {
				title: title.trim().to_owned(),
				..Hobby::default()
			},
			HobbyDoc::Detailed { title, desc, image } => Hobby {
				title: text(title),
				desc: text(desc),
				image: text(image),
			},
		}
	}
}

impl WorkDoc {
	fn normalize(self) -> Work {
		Work {
			title: text(self.title),
			desc: text(self.desc),
			live: text(self.live),
			code: text(self.code),
		}
	}
}

/// The normalised document handed to the renderer. Immutable once received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
	/// `None` leaves the static hero and contact list as they are.
	pub profile: Option<Profile>,
	pub skills: Skills,
	pub careers: Vec<Career>,
	pub links: Vec<Link>,
	pub hobbies: Vec<Hobby>,
	pub works: Vec<Work>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
	pub name: String,
	pub title: String,
	pub summary: String,
	pub contacts: Contacts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
	pub email: String,
	pub github: String,
	pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skills {
	Flat(Vec<String>),
	Categorized(Vec<SkillGroup>),
}

impl Default for Skills {
	fn default() -> Self {
		Skills::Flat(Vec::new())
	}
}

impl Skills {
	/// Number of fragments the skills section renders: one per chip, or one per category.
	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			Skills::Flat(items) => items.len(),
			Skills::Categorized(groups) => groups.len(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillGroup {
	pub category: String,
	pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Career {
	pub period: String,
	pub title: String,
	pub industry: String,
	pub description: String,
	pub languages: Vec<String>,
	pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
	pub title: String,
	pub href: String,
	pub desc: String,
	pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hobby {
	pub title: String,
	pub desc: String,
	pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Work {
	pub title: String,
	pub desc: String,
	pub live: String,
	pub code: String,
}

#[cfg(test)]
mod tests {
	use super::{Career, PortfolioDocument, SkillGroup, Skills};
	use crate::error::FetchError;

	#[test]
	fn empty_object_normalizes_to_empty_sections() {
		let portfolio = PortfolioDocument::from_json("{}").unwrap().normalize();
		assert_eq!(portfolio.profile, None);
		assert!(portfolio.skills.is_empty());
		assert!(portfolio.careers.is_empty());
		assert!(portfolio.links.is_empty());
		assert!(portfolio.hobbies.is_empty());
		assert!(portfolio.works.is_empty());
	}

	#[test]
	fn nulls_are_absent() {
		let portfolio = PortfolioDocument::from_json(r#"{"profile":{"name":null,"contacts":null},"links":null}"#).unwrap().normalize();
		let profile = portfolio.profile.unwrap();
		assert_eq!(profile.name, "");
		assert_eq!(profile.contacts.email, "");
		assert!(portfolio.links.is_empty());
	}

	#[test]
	fn mock_backend_payload() {
		let portfolio = PortfolioDocument::from_json(
			r##"{
				"profile": {
					"name": "Your Name",
					"title": "Software Developer",
					"summary": "Building clean web apps.",
					"contacts": { "email": "your.name@example.com", "github": "https://github.com/your-github" }
				},
				"skills": ["TypeScript", "React", " ", "Node.js"],
				"projects": [
					{ "title": "Project One", "desc": "Solves things.", "live": "#", "code": "#" },
					{ "title": "Project Two", "desc": "More things." }
				]
			}"##,
		)
		.unwrap()
		.normalize();

		let profile = portfolio.profile.unwrap();
		assert_eq!(profile.name, "Your Name");
		assert_eq!(profile.contacts.github, "https://github.com/your-github");
		assert_eq!(profile.contacts.linkedin, "");
		assert_eq!(portfolio.skills, Skills::Flat(vec!["TypeScript".to_owned(), "React".to_owned(), "Node.js".to_owned()]));
		assert_eq!(portfolio.works.len(), 2);
		assert_eq!(portfolio.works[1].live, "");
	}

	#[test]
	fn categorized_skills_keep_order() {
		let portfolio = PortfolioDocument::from_json(r#"{"skills":{"Languages":["Rust","Go"],"Tools":"Docker, git ,","Odd":42}}"#).unwrap().normalize();
		assert_eq!(
			portfolio.skills,
			Skills::Categorized(vec![
				SkillGroup { category: "Languages".to_owned(), items: vec!["Rust".to_owned(), "Go".to_owned()] },
				SkillGroup { category: "Tools".to_owned(), items: vec!["Docker".to_owned(), "git".to_owned()] },
				SkillGroup { category: "Odd".to_owned(), items: vec![] },
			])
		);
	}

	#[test]
	fn skill_group_records() {
		let portfolio = PortfolioDocument::from_json(r#"{"skills":[{"category":"Cloud","items":["AWS"]},{}]}"#).unwrap().normalize();
		assert_eq!(portfolio.skills, Skills::Categorized(vec![SkillGroup { category: "Cloud".to_owned(), items: vec!["AWS".to_owned()] }]));
	}

	#[test]
	fn careers_accept_joined_tags_and_drop_blank_rows() {
		let portfolio = PortfolioDocument::from_json(
			r#"{"careers":[
				{"period":"2020-2023","title":"Engineer","industry":"Finance","description":"Built things.","languages":"Java, Kotlin","tools":["Gradle"]},
				{"period":" ","title":""}
			]}"#,
		)
		.unwrap()
		.normalize();
		assert_eq!(
			portfolio.careers,
			vec![Career {
				period: "2020-2023".to_owned(),
				title: "Engineer".to_owned(),
				industry: "Finance".to_owned(),
				description: "Built things.".to_owned(),
				languages: vec!["Java".to_owned(), "Kotlin".to_owned()],
				tools: vec!["Gradle".to_owned()],
			}]
		);
	}

	#[test]
	fn hobbies_as_strings_or_records() {
		let portfolio = PortfolioDocument::from_json(r#"{"hobbies":["Climbing",{"title":"Photography","desc":"Film only"},""]}"#).unwrap().normalize();
		assert_eq!(portfolio.hobbies.len(), 2);
		assert_eq!(portfolio.hobbies[0].title, "Climbing");
		assert_eq!(portfolio.hobbies[1].desc, "Film only");
	}

	#[test]
	fn malformed_body() {
		assert!(matches!(PortfolioDocument::from_json("<html>502</html>"), Err(FetchError::Decode(_))));
		assert!(matches!(PortfolioDocument::from_json("[]"), Err(FetchError::Decode(_))));
		assert!(matches!(PortfolioDocument::from_json("42"), Err(FetchError::Decode(_))));
	}

	#[test]
	fn scalars_are_read_as_text() {
		let portfolio = PortfolioDocument::from_json(
			r#"{
				"profile": {"name": "A", "title": 42, "contacts": {"email": true}},
				"links": [{"title": "x"}],
				"careers": [{"period": 2020, "title": "Eng", "description": {"nested": 1}}]
			}"#,
		)
		.unwrap()
		.normalize();

		let profile = portfolio.profile.unwrap();
		assert_eq!(profile.name, "A");
		assert_eq!(profile.title, "42");
		assert_eq!(profile.contacts.email, "true");
		assert_eq!(portfolio.links.len(), 1);
		assert_eq!(portfolio.careers.len(), 1);
		assert_eq!(portfolio.careers[0].period, "2020");
		assert_eq!(portfolio.careers[0].title, "Eng");
		assert_eq!(portfolio.careers[0].description, "");
	}

	#[test]
	fn odd_sections_and_entries_are_skipped() {
		let portfolio = PortfolioDocument::from_json(
			r#"{
				"profile": "nope",
				"skills": 7,
				"links": "nope",
				"works": [{"title": "Kept"}, 3, "loose", {"title": "Also kept", "live": ["x"]}],
				"hobbies": ["Climbing", 12, null],
				"careers": [{"title": "Eng", "tools": {"x": 1}}]
			}"#,
		)
		.unwrap()
		.normalize();

		assert_eq!(portfolio.profile, None);
		assert!(portfolio.skills.is_empty());
		assert!(portfolio.links.is_empty());
		assert_eq!(portfolio.works.iter().map(|work| work.title.as_str()).collect::<Vec<_>>(), ["Kept", "Also kept"]);
		assert_eq!(portfolio.works[1].live, "");
		assert_eq!(portfolio.hobbies.len(), 1);
		assert_eq!(portfolio.careers[0].tools, Vec::<String>::new());
	}
}
