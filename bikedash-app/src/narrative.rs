//! Static narrative text blocks accompanying the chart sequence

pub const DASHBOARD_TITLE: &str = "Data Analysis - Bike Sharing Dataset (2011-2012)";

pub const INTRO: &str = "Descriptive statistics for the bike-sharing system: monthly rental \
trends for the selected year, the correlation structure of the usage drivers, and the split \
between casual and registered riders across the week.";

pub const HEATMAP_ANALYSIS: &str = "Following Cohen's effect size guidelines, coefficients \
around 0.3 are read as moderate and around 0.5 as large. The heatmap singles out normalized \
temperature as the strongest driver of rental volume, which explains most of the seasonal \
swing visible in the monthly trend.";

pub const WEEKDAY_ANALYSIS: &str = "Registered riders dominate on working days, pointing at \
commute usage, while casual rentals peak on the weekend. Total volume per weekday stays in a \
narrow band, so the weekday mix shifts far more than the overall demand.";

pub const CONCLUSION: &str = "Rentals climb from late Q1 to mid Q3, tracking the warmer \
seasons; temperature change across seasons is the dominant factor. Friday carries the largest \
registered volume while Sunday is the weakest registered day and the strongest casual one, \
which is where growth efforts would pay off first.";
