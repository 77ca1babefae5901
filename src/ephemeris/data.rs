//! Generated ephemeris tables.
//!
//! True full and new moon days (UTC) for 1990 through 2050, computed offline from
//! the Meeus lunar phase series with a Delta-T correction. Do not edit by hand.

/// First year covered by the tables.
pub(crate) const FIRST_YEAR: i32 = 1990;

/// Last year covered by the tables.
pub(crate) const LAST_YEAR: i32 = 2050;

/// Full moon days in chronological order.
#[rustfmt::skip]
pub(crate) const FULL_MOON_DATES: &[&str] = &[
    "1990-01-11", "1990-02-09", "1990-03-11", "1990-04-10", "1990-05-09", "1990-06-08",
    "1990-07-08", "1990-08-06", "1990-09-05", "1990-10-04", "1990-11-02", "1990-12-02",
    "1990-12-31", "1991-01-30", "1991-02-28", "1991-03-30", "1991-04-28", "1991-05-28",
    "1991-06-27", "1991-07-26", "1991-08-25", "1991-09-23", "1991-10-23", "1991-11-21",
    "1991-12-21", "1992-01-19", "1992-02-18", "1992-03-18", "1992-04-17", "1992-05-16",
    "1992-06-15", "1992-07-14", "1992-08-13", "1992-09-12", "1992-10-11", "1992-11-10",
    "1992-12-09", "1993-01-08", "1993-02-06", "1993-03-08", "1993-04-06", "1993-05-06",
    "1993-06-04", "1993-07-03", "1993-08-02", "1993-09-01", "1993-09-30", "1993-10-30",
    "1993-11-29", "1993-12-28", "1994-01-27", "1994-02-26", "1994-03-27", "1994-04-25",
    "1994-05-25", "1994-06-23", "1994-07-22", "1994-08-21", "1994-09-19", "1994-10-19",
    "1994-11-18", "1994-12-18", "1995-01-16", "1995-02-15", "1995-03-17", "1995-04-15",
    "1995-05-14", "1995-06-13", "1995-07-12", "1995-08-10", "1995-09-09", "1995-10-08",
    "1995-11-07", "1995-12-07", "1996-01-05", "1996-02-04", "1996-03-05", "1996-04-04",
    "1996-05-03", "1996-06-01", "1996-07-01", "1996-07-30", "1996-08-28", "1996-09-27",
    "1996-10-26", "1996-11-25", "1996-12-24", "1997-01-23", "1997-02-22", "1997-03-24",
    "1997-04-22", "1997-05-22", "1997-06-20", "1997-07-20", "1997-08-18", "1997-09-16",
    "1997-10-16", "1997-11-14", "1997-12-14", "1998-01-12", "1998-02-11", "1998-03-13",
    "1998-04-11", "1998-05-11", "1998-06-10", "1998-07-09", "1998-08-08", "1998-09-06",
    "1998-10-05", "1998-11-04", "1998-12-03", "1999-01-02", "1999-01-31", "1999-03-02",
    "1999-03-31", "1999-04-30", "1999-05-30", "1999-06-28", "1999-07-28", "1999-08-26",
    "1999-09-25", "1999-10-24", "1999-11-23", "1999-12-22", "2000-01-21", "2000-02-19",
    "2000-03-20", "2000-04-18", "2000-05-18", "2000-06-16", "2000-07-16", "2000-08-15",
    "2000-09-13", "2000-10-13", "2000-11-11", "2000-12-11", "2001-01-09", "2001-02-08",
    "2001-03-09", "2001-04-08", "2001-05-07", "2001-06-06", "2001-07-05", "2001-08-04",
    "2001-09-02", "2001-10-02", "2001-11-01", "2001-11-30", "2001-12-30", "2002-01-28",
    "2002-02-27", "2002-03-28", "2002-04-27", "2002-05-26", "2002-06-24", "2002-07-24",
    "2002-08-22", "2002-09-21", "2002-10-21", "2002-11-20", "2002-12-19", "2003-01-18",
    "2003-02-16", "2003-03-18", "2003-04-16", "2003-05-16", "2003-06-14", "2003-07-13",
    "2003-08-12", "2003-09-10", "2003-10-10", "2003-11-09", "2003-12-08", "2004-01-07",
    "2004-02-06", "2004-03-06", "2004-04-05", "2004-05-04", "2004-06-03", "2004-07-02",
    "2004-07-31", "2004-08-30", "2004-09-28", "2004-10-28", "2004-11-26", "2004-12-26",
    "2005-01-25", "2005-02-24", "2005-03-25", "2005-04-24", "2005-05-23", "2005-06-22",
    "2005-07-21", "2005-08-19", "2005-09-18", "2005-10-17", "2005-11-16", "2005-12-15",
    "2006-01-14", "2006-02-13", "2006-03-14", "2006-04-13", "2006-05-13", "2006-06-11",
    "2006-07-11", "2006-08-09", "2006-09-07", "2006-10-07", "2006-11-05", "2006-12-05",
    "2007-01-03", "2007-02-02", "2007-03-03", "2007-04-02", "2007-05-02", "2007-06-01",
    "2007-06-30", "2007-07-30", "2007-08-28", "2007-09-26", "2007-10-26", "2007-11-24",
    "2007-12-24", "2008-01-22", "2008-02-21", "2008-03-21", "2008-04-20", "2008-05-20",
    "2008-06-18", "2008-07-18", "2008-08-16", "2008-09-15", "2008-10-14", "2008-11-13",
    "2008-12-12", "2009-01-11", "2009-02-09", "2009-03-11", "2009-04-09", "2009-05-09",
    "2009-06-07", "2009-07-07", "2009-08-06", "2009-09-04", "2009-10-04", "2009-11-02",
    "2009-12-02", "2009-12-31", "2010-01-30", "2010-02-28", "2010-03-30", "2010-04-28",
    "2010-05-27", "2010-06-26", "2010-07-26", "2010-08-24", "2010-09-23", "2010-10-23",
    "2010-11-21", "2010-12-21", "2011-01-19", "2011-02-18", "2011-03-19", "2011-04-18",
    "2011-05-17", "2011-06-15", "2011-07-15", "2011-08-13", "2011-09-12", "2011-10-12",
    "2011-11-10", "2011-12-10", "2012-01-09", "2012-02-07", "2012-03-08", "2012-04-06",
    "2012-05-06", "2012-06-04", "2012-07-03", "2012-08-02", "2012-08-31", "2012-09-30",
    "2012-10-29", "2012-11-28", "2012-12-28", "2013-01-27", "2013-02-25", "2013-03-27",
    "2013-04-25", "2013-05-25", "2013-06-23", "2013-07-22", "2013-08-21", "2013-09-19",
    "2013-10-18", "2013-11-17", "2013-12-17", "2014-01-16", "2014-02-14", "2014-03-16",
    "2014-04-15", "2014-05-14", "2014-06-13", "2014-07-12", "2014-08-10", "2014-09-09",
    "2014-10-08", "2014-11-06", "2014-12-06", "2015-01-05", "2015-02-03", "2015-03-05",
    "2015-04-04", "2015-05-04", "2015-06-02", "2015-07-02", "2015-07-31", "2015-08-29",
    "2015-09-28", "2015-10-27", "2015-11-25", "2015-12-25", "2016-01-24", "2016-02-22",
    "2016-03-23", "2016-04-22", "2016-05-21", "2016-06-20", "2016-07-19", "2016-08-18",
    "2016-09-16", "2016-10-16", "2016-11-14", "2016-12-14", "2017-01-12", "2017-02-11",
    "2017-03-12", "2017-04-11", "2017-05-10", "2017-06-09", "2017-07-09", "2017-08-07",
    "2017-09-06", "2017-10-05", "2017-11-04", "2017-12-03", "2018-01-02", "2018-01-31",
    "2018-03-02", "2018-03-31", "2018-04-30", "2018-05-29", "2018-06-28", "2018-07-27",
    "2018-08-26", "2018-09-25", "2018-10-24", "2018-11-23", "2018-12-22", "2019-01-21",
    "2019-02-19", "2019-03-21", "2019-04-19", "2019-05-18", "2019-06-17", "2019-07-16",
    "2019-08-15", "2019-09-14", "2019-10-13", "2019-11-12", "2019-12-12", "2020-01-10",
    "2020-02-09", "2020-03-09", "2020-04-08", "2020-05-07", "2020-06-05", "2020-07-05",
    "2020-08-03", "2020-09-02", "2020-10-01", "2020-10-31", "2020-11-30", "2020-12-30",
    "2021-01-28", "2021-02-27", "2021-03-28", "2021-04-27", "2021-05-26", "2021-06-24",
    "2021-07-24", "2021-08-22", "2021-09-20", "2021-10-20", "2021-11-19", "2021-12-19",
    "2022-01-17", "2022-02-16", "2022-03-18", "2022-04-16", "2022-05-16", "2022-06-14",
    "2022-07-13", "2022-08-12", "2022-09-10", "2022-10-09", "2022-11-08", "2022-12-08",
    "2023-01-06", "2023-02-05", "2023-03-07", "2023-04-06", "2023-05-05", "2023-06-04",
    "2023-07-03", "2023-08-01", "2023-08-31", "2023-09-29", "2023-10-28", "2023-11-27",
    "2023-12-27", "2024-01-25", "2024-02-24", "2024-03-25", "2024-04-23", "2024-05-23",
    "2024-06-22", "2024-07-21", "2024-08-19", "2024-09-18", "2024-10-17", "2024-11-15",
    "2024-12-15", "2025-01-13", "2025-02-12", "2025-03-14", "2025-04-13", "2025-05-12",
    "2025-06-11", "2025-07-10", "2025-08-09", "2025-09-07", "2025-10-07", "2025-11-05",
    "2025-12-04", "2026-01-03", "2026-02-01", "2026-03-03", "2026-04-02", "2026-05-01",
    "2026-05-31", "2026-06-29", "2026-07-29", "2026-08-28", "2026-09-26", "2026-10-26",
    "2026-11-24", "2026-12-24", "2027-01-22", "2027-02-20", "2027-03-22", "2027-04-20",
    "2027-05-20", "2027-06-19", "2027-07-18", "2027-08-17", "2027-09-15", "2027-10-15",
    "2027-11-14", "2027-12-13", "2028-01-12", "2028-02-10", "2028-03-11", "2028-04-09",
    "2028-05-08", "2028-06-07", "2028-07-06", "2028-08-05", "2028-09-03", "2028-10-03",
    "2028-11-02", "2028-12-02", "2028-12-31", "2029-01-30", "2029-02-28", "2029-03-30",
    "2029-04-28", "2029-05-27", "2029-06-26", "2029-07-25", "2029-08-24", "2029-09-22",
    "2029-10-22", "2029-11-21", "2029-12-20", "2030-01-19", "2030-02-18", "2030-03-19",
    "2030-04-18", "2030-05-17", "2030-06-15", "2030-07-15", "2030-08-13", "2030-09-11",
    "2030-10-11", "2030-11-10", "2030-12-09", "2031-01-08", "2031-02-07", "2031-03-09",
    "2031-04-07", "2031-05-07", "2031-06-05", "2031-07-04", "2031-08-03", "2031-09-01",
    "2031-09-30", "2031-10-30", "2031-11-28", "2031-12-28", "2032-01-27", "2032-02-26",
    "2032-03-27", "2032-04-25", "2032-05-25", "2032-06-23", "2032-07-22", "2032-08-21",
    "2032-09-19", "2032-10-18", "2032-11-17", "2032-12-16", "2033-01-15", "2033-02-14",
    "2033-03-16", "2033-04-14", "2033-05-14", "2033-06-12", "2033-07-12", "2033-08-10",
    "2033-09-09", "2033-10-08", "2033-11-06", "2033-12-06", "2034-01-04", "2034-02-03",
    "2034-03-05", "2034-04-03", "2034-05-03", "2034-06-02", "2034-07-01", "2034-07-31",
    "2034-08-29", "2034-09-28", "2034-10-27", "2034-11-25", "2034-12-25", "2035-01-23",
    "2035-02-22", "2035-03-23", "2035-04-22", "2035-05-22", "2035-06-20", "2035-07-20",
    "2035-08-19", "2035-09-17", "2035-10-17", "2035-11-15", "2035-12-15", "2036-01-13",
    "2036-02-11", "2036-03-12", "2036-04-10", "2036-05-10", "2036-06-08", "2036-07-08",
    "2036-08-07", "2036-09-05", "2036-10-05", "2036-11-04", "2036-12-03", "2037-01-02",
    "2037-01-31", "2037-03-02", "2037-03-31", "2037-04-29", "2037-05-29", "2037-06-27",
    "2037-07-27", "2037-08-25", "2037-09-24", "2037-10-24", "2037-11-22", "2037-12-22",
    "2038-01-21", "2038-02-19", "2038-03-21", "2038-04-19", "2038-05-18", "2038-06-17",
    "2038-07-16", "2038-08-14", "2038-09-13", "2038-10-13", "2038-11-11", "2038-12-11",
    "2039-01-10", "2039-02-09", "2039-03-10", "2039-04-09", "2039-05-08", "2039-06-06",
    "2039-07-06", "2039-08-04", "2039-09-02", "2039-10-02", "2039-10-31", "2039-11-30",
    "2039-12-30", "2040-01-29", "2040-02-28", "2040-03-28", "2040-04-27", "2040-05-26",
    "2040-06-24", "2040-07-24", "2040-08-22", "2040-09-20", "2040-10-20", "2040-11-18",
    "2040-12-18", "2041-01-17", "2041-02-16", "2041-03-17", "2041-04-16", "2041-05-16",
    "2041-06-14", "2041-07-13", "2041-08-12", "2041-09-10", "2041-10-09", "2041-11-08",
    "2041-12-07", "2042-01-06", "2042-02-05", "2042-03-06", "2042-04-05", "2042-05-05",
    "2042-06-03", "2042-07-03", "2042-08-01", "2042-08-31", "2042-09-29", "2042-10-28",
    "2042-11-27", "2042-12-26", "2043-01-25", "2043-02-23", "2043-03-25", "2043-04-24",
    "2043-05-23", "2043-06-22", "2043-07-22", "2043-08-20", "2043-09-19", "2043-10-18",
    "2043-11-16", "2043-12-16", "2044-01-14", "2044-02-13", "2044-03-13", "2044-04-12",
    "2044-05-12", "2044-06-10", "2044-07-10", "2044-08-08", "2044-09-07", "2044-10-07",
    "2044-11-05", "2044-12-04", "2045-01-03", "2045-02-01", "2045-03-03", "2045-04-01",
    "2045-05-01", "2045-05-30", "2045-06-29", "2045-07-28", "2045-08-27", "2045-09-26",
    "2045-10-25", "2045-11-24", "2045-12-24", "2046-01-22", "2046-02-20", "2046-03-22",
    "2046-04-20", "2046-05-20", "2046-06-18", "2046-07-18", "2046-08-16", "2046-09-15",
    "2046-10-14", "2046-11-13", "2046-12-13", "2047-01-12", "2047-02-10", "2047-03-12",
    "2047-04-10", "2047-05-09", "2047-06-08", "2047-07-07", "2047-08-05", "2047-09-04",
    "2047-10-03", "2047-11-02", "2047-12-02", "2048-01-01", "2048-01-31", "2048-02-29",
    "2048-03-30", "2048-04-28", "2048-05-27", "2048-06-26", "2048-07-25", "2048-08-23",
    "2048-09-22", "2048-10-21", "2048-11-20", "2048-12-20", "2049-01-19", "2049-02-17",
    "2049-03-19", "2049-04-18", "2049-05-17", "2049-06-15", "2049-07-15", "2049-08-13",
    "2049-09-11", "2049-10-11", "2049-11-09", "2049-12-09", "2050-01-08", "2050-02-06",
    "2050-03-08", "2050-04-07", "2050-05-06", "2050-06-05", "2050-07-04", "2050-08-03",
    "2050-09-01", "2050-09-30", "2050-10-30", "2050-11-28", "2050-12-28",
];

/// New moon days in chronological order.
#[rustfmt::skip]
pub(crate) const NEW_MOON_DATES: &[&str] = &[
    "1990-01-26", "1990-02-25", "1990-03-26", "1990-04-25", "1990-05-24", "1990-06-22",
    "1990-07-22", "1990-08-20", "1990-09-19", "1990-10-18", "1990-11-17", "1990-12-17",
    "1991-01-15", "1991-02-14", "1991-03-16", "1991-04-14", "1991-05-14", "1991-06-12",
    "1991-07-11", "1991-08-10", "1991-09-08", "1991-10-07", "1991-11-06", "1991-12-06",
    "1992-01-04", "1992-02-03", "1992-03-04", "1992-04-03", "1992-05-02", "1992-06-01",
    "1992-06-30", "1992-07-29", "1992-08-28", "1992-09-26", "1992-10-25", "1992-11-24",
    "1992-12-24", "1993-01-22", "1993-02-21", "1993-03-23", "1993-04-21", "1993-05-21",
    "1993-06-20", "1993-07-19", "1993-08-17", "1993-09-16", "1993-10-15", "1993-11-13",
    "1993-12-13", "1994-01-11", "1994-02-10", "1994-03-12", "1994-04-11", "1994-05-10",
    "1994-06-09", "1994-07-08", "1994-08-07", "1994-09-05", "1994-10-05", "1994-11-03",
    "1994-12-02", "1995-01-01", "1995-01-30", "1995-03-01", "1995-03-31", "1995-04-29",
    "1995-05-29", "1995-06-28", "1995-07-27", "1995-08-26", "1995-09-24", "1995-10-24",
    "1995-11-22", "1995-12-22", "1996-01-20", "1996-02-18", "1996-03-19", "1996-04-17",
    "1996-05-17", "1996-06-16", "1996-07-15", "1996-08-14", "1996-09-12", "1996-10-12",
    "1996-11-11", "1996-12-10", "1997-01-09", "1997-02-07", "1997-03-09", "1997-04-07",
    "1997-05-06", "1997-06-05", "1997-07-04", "1997-08-03", "1997-09-01", "1997-10-01",
    "1997-10-31", "1997-11-30", "1997-12-29", "1998-01-28", "1998-02-26", "1998-03-28",
    "1998-04-26", "1998-05-25", "1998-06-24", "1998-07-23", "1998-08-22", "1998-09-20",
    "1998-10-20", "1998-11-19", "1998-12-18", "1999-01-17", "1999-02-16", "1999-03-17",
    "1999-04-16", "1999-05-15", "1999-06-13", "1999-07-13", "1999-08-11", "1999-09-09",
    "1999-10-09", "1999-11-08", "1999-12-07", "2000-01-06", "2000-02-05", "2000-03-06",
    "2000-04-04", "2000-05-04", "2000-06-02", "2000-07-01", "2000-07-31", "2000-08-29",
    "2000-09-27", "2000-10-27", "2000-11-25", "2000-12-25", "2001-01-24", "2001-02-23",
    "2001-03-25", "2001-04-23", "2001-05-23", "2001-06-21", "2001-07-20", "2001-08-19",
    "2001-09-17", "2001-10-16", "2001-11-15", "2001-12-14", "2002-01-13", "2002-02-12",
    "2002-03-14", "2002-04-12", "2002-05-12", "2002-06-10", "2002-07-10", "2002-08-08",
    "2002-09-07", "2002-10-06", "2002-11-04", "2002-12-04", "2003-01-02", "2003-02-01",
    "2003-03-03", "2003-04-01", "2003-05-01", "2003-05-31", "2003-06-29", "2003-07-29",
    "2003-08-27", "2003-09-26", "2003-10-25", "2003-11-23", "2003-12-23", "2004-01-21",
    "2004-02-20", "2004-03-20", "2004-04-19", "2004-05-19", "2004-06-17", "2004-07-17",
    "2004-08-16", "2004-09-14", "2004-10-14", "2004-11-12", "2004-12-12", "2005-01-10",
    "2005-02-08", "2005-03-10", "2005-04-08", "2005-05-08", "2005-06-06", "2005-07-06",
    "2005-08-05", "2005-09-03", "2005-10-03", "2005-11-02", "2005-12-01", "2005-12-31",
    "2006-01-29", "2006-02-28", "2006-03-29", "2006-04-27", "2006-05-27", "2006-06-25",
    "2006-07-25", "2006-08-23", "2006-09-22", "2006-10-22", "2006-11-20", "2006-12-20",
    "2007-01-19", "2007-02-17", "2007-03-19", "2007-04-17", "2007-05-16", "2007-06-15",
    "2007-07-14", "2007-08-12", "2007-09-11", "2007-10-11", "2007-11-09", "2007-12-09",
    "2008-01-08", "2008-02-07", "2008-03-07", "2008-04-06", "2008-05-05", "2008-06-03",
    "2008-07-03", "2008-08-01", "2008-08-30", "2008-09-29", "2008-10-28", "2008-11-27",
    "2008-12-27", "2009-01-26", "2009-02-25", "2009-03-26", "2009-04-25", "2009-05-24",
    "2009-06-22", "2009-07-22", "2009-08-20", "2009-09-18", "2009-10-18", "2009-11-16",
    "2009-12-16", "2010-01-15", "2010-02-14", "2010-03-15", "2010-04-14", "2010-05-14",
    "2010-06-12", "2010-07-11", "2010-08-10", "2010-09-08", "2010-10-07", "2010-11-06",
    "2010-12-05", "2011-01-04", "2011-02-03", "2011-03-04", "2011-04-03", "2011-05-03",
    "2011-06-01", "2011-07-01", "2011-07-30", "2011-08-29", "2011-09-27", "2011-10-26",
    "2011-11-25", "2011-12-24", "2012-01-23", "2012-02-21", "2012-03-22", "2012-04-21",
    "2012-05-20", "2012-06-19", "2012-07-19", "2012-08-17", "2012-09-16", "2012-10-15",
    "2012-11-13", "2012-12-13", "2013-01-11", "2013-02-10", "2013-03-11", "2013-04-10",
    "2013-05-10", "2013-06-08", "2013-07-08", "2013-08-06", "2013-09-05", "2013-10-05",
    "2013-11-03", "2013-12-03", "2014-01-01", "2014-01-30", "2014-03-01", "2014-03-30",
    "2014-04-29", "2014-05-28", "2014-06-27", "2014-07-26", "2014-08-25", "2014-09-24",
    "2014-10-23", "2014-11-22", "2014-12-22", "2015-01-20", "2015-02-18", "2015-03-20",
    "2015-04-18", "2015-05-18", "2015-06-16", "2015-07-16", "2015-08-14", "2015-09-13",
    "2015-10-13", "2015-11-11", "2015-12-11", "2016-01-10", "2016-02-08", "2016-03-09",
    "2016-04-07", "2016-05-06", "2016-06-05", "2016-07-04", "2016-08-02", "2016-09-01",
    "2016-10-01", "2016-10-30", "2016-11-29", "2016-12-29", "2017-01-28", "2017-02-26",
    "2017-03-28", "2017-04-26", "2017-05-25", "2017-06-24", "2017-07-23", "2017-08-21",
    "2017-09-20", "2017-10-19", "2017-11-18", "2017-12-18", "2018-01-17", "2018-02-15",
    "2018-03-17", "2018-04-16", "2018-05-15", "2018-06-13", "2018-07-13", "2018-08-11",
    "2018-09-09", "2018-10-09", "2018-11-07", "2018-12-07", "2019-01-06", "2019-02-04",
    "2019-03-06", "2019-04-05", "2019-05-04", "2019-06-03", "2019-07-02", "2019-08-01",
    "2019-08-30", "2019-09-28", "2019-10-28", "2019-11-26", "2019-12-26", "2020-01-24",
    "2020-02-23", "2020-03-24", "2020-04-23", "2020-05-22", "2020-06-21", "2020-07-20",
    "2020-08-19", "2020-09-17", "2020-10-16", "2020-11-15", "2020-12-14", "2021-01-13",
    "2021-02-11", "2021-03-13", "2021-04-12", "2021-05-11", "2021-06-10", "2021-07-10",
    "2021-08-08", "2021-09-07", "2021-10-06", "2021-11-04", "2021-12-04", "2022-01-02",
    "2022-02-01", "2022-03-02", "2022-04-01", "2022-04-30", "2022-05-30", "2022-06-29",
    "2022-07-28", "2022-08-27", "2022-09-25", "2022-10-25", "2022-11-23", "2022-12-23",
    "2023-01-21", "2023-02-20", "2023-03-21", "2023-04-20", "2023-05-19", "2023-06-18",
    "2023-07-17", "2023-08-16", "2023-09-15", "2023-10-14", "2023-11-13", "2023-12-12",
    "2024-01-11", "2024-02-09", "2024-03-10", "2024-04-08", "2024-05-08", "2024-06-06",
    "2024-07-05", "2024-08-04", "2024-09-03", "2024-10-02", "2024-11-01", "2024-12-01",
    "2024-12-30", "2025-01-29", "2025-02-28", "2025-03-29", "2025-04-27", "2025-05-27",
    "2025-06-25", "2025-07-24", "2025-08-23", "2025-09-21", "2025-10-21", "2025-11-20",
    "2025-12-20", "2026-01-18", "2026-02-17", "2026-03-19", "2026-04-17", "2026-05-16",
    "2026-06-15", "2026-07-14", "2026-08-12", "2026-09-11", "2026-10-10", "2026-11-09",
    "2026-12-09", "2027-01-07", "2027-02-06", "2027-03-08", "2027-04-06", "2027-05-06",
    "2027-06-04", "2027-07-04", "2027-08-02", "2027-08-31", "2027-09-30", "2027-10-29",
    "2027-11-28", "2027-12-27", "2028-01-26", "2028-02-25", "2028-03-26", "2028-04-24",
    "2028-05-24", "2028-06-22", "2028-07-22", "2028-08-20", "2028-09-18", "2028-10-18",
    "2028-11-16", "2028-12-16", "2029-01-14", "2029-02-13", "2029-03-15", "2029-04-13",
    "2029-05-13", "2029-06-12", "2029-07-11", "2029-08-10", "2029-09-08", "2029-10-07",
    "2029-11-06", "2029-12-05", "2030-01-04", "2030-02-02", "2030-03-04", "2030-04-02",
    "2030-05-02", "2030-06-01", "2030-06-30", "2030-07-30", "2030-08-28", "2030-09-27",
    "2030-10-26", "2030-11-25", "2030-12-24", "2031-01-23", "2031-02-21", "2031-03-23",
    "2031-04-21", "2031-05-21", "2031-06-19", "2031-07-19", "2031-08-18", "2031-09-16",
    "2031-10-16", "2031-11-14", "2031-12-14", "2032-01-12", "2032-02-11", "2032-03-11",
    "2032-04-10", "2032-05-09", "2032-06-08", "2032-07-07", "2032-08-06", "2032-09-04",
    "2032-10-04", "2032-11-03", "2032-12-02", "2033-01-01", "2033-01-30", "2033-03-01",
    "2033-03-30", "2033-04-29", "2033-05-28", "2033-06-26", "2033-07-26", "2033-08-24",
    "2033-09-23", "2033-10-23", "2033-11-22", "2033-12-21", "2034-01-20", "2034-02-18",
    "2034-03-20", "2034-04-18", "2034-05-18", "2034-06-16", "2034-07-15", "2034-08-14",
    "2034-09-12", "2034-10-12", "2034-11-11", "2034-12-10", "2035-01-09", "2035-02-08",
    "2035-03-09", "2035-04-08", "2035-05-07", "2035-06-06", "2035-07-05", "2035-08-03",
    "2035-09-02", "2035-10-01", "2035-10-31", "2035-11-29", "2035-12-29", "2036-01-28",
    "2036-02-27", "2036-03-27", "2036-04-26", "2036-05-25", "2036-06-24", "2036-07-23",
    "2036-08-21", "2036-09-20", "2036-10-19", "2036-11-18", "2036-12-17", "2037-01-16",
    "2037-02-15", "2037-03-16", "2037-04-15", "2037-05-15", "2037-06-13", "2037-07-13",
    "2037-08-11", "2037-09-09", "2037-10-09", "2037-11-07", "2037-12-06", "2038-01-05",
    "2038-02-04", "2038-03-05", "2038-04-04", "2038-05-04", "2038-06-03", "2038-07-02",
    "2038-08-01", "2038-08-30", "2038-09-28", "2038-10-28", "2038-11-26", "2038-12-26",
    "2039-01-24", "2039-02-23", "2039-03-24", "2039-04-23", "2039-05-23", "2039-06-21",
    "2039-07-21", "2039-08-19", "2039-09-18", "2039-10-17", "2039-11-16", "2039-12-15",
    "2040-01-14", "2040-02-12", "2040-03-13", "2040-04-11", "2040-05-11", "2040-06-09",
    "2040-07-09", "2040-08-08", "2040-09-06", "2040-10-06", "2040-11-04", "2040-12-04",
    "2041-01-02", "2041-02-01", "2041-03-02", "2041-04-01", "2041-04-30", "2041-05-29",
    "2041-06-28", "2041-07-28", "2041-08-26", "2041-09-25", "2041-10-25", "2041-11-23",
    "2041-12-23", "2042-01-21", "2042-02-20", "2042-03-21", "2042-04-20", "2042-05-19",
    "2042-06-17", "2042-07-17", "2042-08-15", "2042-09-14", "2042-10-14", "2042-11-12",
    "2042-12-12", "2043-01-11", "2043-02-09", "2043-03-11", "2043-04-09", "2043-05-09",
    "2043-06-07", "2043-07-06", "2043-08-05", "2043-09-03", "2043-10-03", "2043-11-01",
    "2043-12-01", "2043-12-31", "2044-01-30", "2044-02-28", "2044-03-29", "2044-04-27",
    "2044-05-27", "2044-06-25", "2044-07-24", "2044-08-23", "2044-09-21", "2044-10-20",
    "2044-11-19", "2044-12-19", "2045-01-18", "2045-02-16", "2045-03-18", "2045-04-17",
    "2045-05-16", "2045-06-15", "2045-07-14", "2045-08-12", "2045-09-11", "2045-10-10",
    "2045-11-08", "2045-12-08", "2046-01-07", "2046-02-05", "2046-03-07", "2046-04-06",
    "2046-05-06", "2046-06-04", "2046-07-04", "2046-08-02", "2046-08-31", "2046-09-30",
    "2046-10-29", "2046-11-27", "2046-12-27", "2047-01-26", "2047-02-24", "2047-03-26",
    "2047-04-25", "2047-05-24", "2047-06-23", "2047-07-22", "2047-08-21", "2047-09-19",
    "2047-10-19", "2047-11-17", "2047-12-16", "2048-01-15", "2048-02-14", "2048-03-14",
    "2048-04-13", "2048-05-12", "2048-06-11", "2048-07-11", "2048-08-09", "2048-09-08",
    "2048-10-07", "2048-11-06", "2048-12-05", "2049-01-04", "2049-02-02", "2049-03-04",
    "2049-04-02", "2049-05-02", "2049-05-31", "2049-06-30", "2049-07-29", "2049-08-28",
    "2049-09-27", "2049-10-26", "2049-11-25", "2049-12-24", "2050-01-23", "2050-02-21",
    "2050-03-23", "2050-04-21", "2050-05-20", "2050-06-19", "2050-07-18", "2050-08-17",
    "2050-09-16", "2050-10-15", "2050-11-14", "2050-12-14",
];
